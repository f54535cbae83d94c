//! # Mock Store & Testing Guide
//!
//! [`MockStore<T>`] hands out a real [`DocumentClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running collection. Use
//! it to test code that sits *around* a client without spawning actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockStore | Real Actor |
//! |---------|-----------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | None (expectations) | Real documents |
//! | **Use Case** | Logic around the client | The collection itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use docstore::mock::MockStore;
//! use docstore::{Document, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl Document for Note {
//!     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
//!     type Context = (); type Error = NoteError;
//!     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a permission failure from the database
//!     mock.expect_get(1).return_err(StoreError::NotFound("1".into()));
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(StoreError::NotFound(_))));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in the order they were registered. A request that
//! does not match the next expectation panics the mock task, which surfaces in
//! the test as [`StoreError::ActorDropped`].
//!
//! For hand-driven tests, [`create_mock_client`] returns a client together with
//! the raw request receiver; the `expect_*` functions pull the next request off
//! it.

use crate::client::DocumentClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: Document> {
    Get {
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Update {
        response: Result<T, StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock collection with expectation tracking.
pub struct MockStore<T: Document> {
    client: DocumentClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: DocumentClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> DocumentClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get { response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Update { response })
    }

    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Delete { response })
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Sets the response of one queued expectation.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    fn new(expectations: Queue<T>, wrap: fn(Result<R, StoreError>) -> Expectation<T>) -> Self {
        Self { expectations, wrap }
    }

    /// Answers the request successfully with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answers the request with `error`.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Tests pull requests off the receiver with the `expect_*` functions below,
/// inspect them, and answer through the returned responder.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (DocumentClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DocumentClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    Option<T::Id>,
    T::Create,
    oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a List.
pub async fn expect_list<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}
