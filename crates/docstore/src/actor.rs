//! # Collection Actor
//!
//! [`DocumentActor`] is the server half of a collection. It owns every
//! document of one type and handles requests one at a time, so the store needs
//! no locking.

use crate::client::DocumentClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::subscription::Subscriber;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Generic actor managing one collection of documents.
///
/// # Usage Pattern
///
/// 1.  **Create**: `DocumentActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on the Tokio runtime.
///
/// ```rust
/// use docstore::{Document, DocumentActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl Document for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         if let Some(text) = update.text { self.text = text; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = DocumentActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(NoteCreate { text: "milk".into() }).await.unwrap();
///     let note = client.get(id).await.unwrap().unwrap();
///     assert_eq!(note.text, "milk");
/// }
/// ```
///
/// # Implementation Details
///
/// * **Create**: uses the caller's id when given, otherwise takes the next
///   value of the internal counter. Fails with `AlreadyExists` on a taken id.
///   The document is stored only after `on_create` succeeds.
/// * **Update**: `on_update` runs against a copy; the copy replaces the stored
///   document only on success, so a failed update leaves no partial write.
/// * **Delete**: `on_delete` may veto the removal.
/// * **Subscribe**: the new live query receives the current matches at once.
///
/// Every successful write republishes to all open live queries and drops the
/// ones whose receivers are gone.
pub struct DocumentActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    subscribers: Vec<Subscriber<T>>,
    next_id: u32,
}

impl<T: Document> DocumentActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the request channel capacity; clients wait when it is
    /// full.
    pub fn new(buffer_size: usize) -> (Self, DocumentClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            subscribers: Vec::new(),
            next_id: 1,
        };
        (actor, DocumentClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "quickcart::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, ?id, ?params, "Create");
                    let id = match id {
                        Some(id) => id,
                        None => self.generate_id(),
                    };
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(StoreError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut doc) => {
                            if let Err(e) = doc.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), doc);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            self.publish();
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let doc = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = doc.is_some(), "Get");
                    let _ = respond_to.send(Ok(doc));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut doc = current.clone();
                    if let Err(e) = doc.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), doc.clone());
                    info!(entity_type, %id, "Updated");
                    self.publish();
                    let _ = respond_to.send(Ok(doc));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(doc) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = doc.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.publish();
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Subscribe { filter, respond_to } => {
                    let (subscriber, subscription) = Subscriber::open(filter, self.store.values());
                    self.subscribers.push(subscriber);
                    debug!(entity_type, subscribers = self.subscribers.len(), "Subscribe");
                    let _ = respond_to.send(Ok(subscription));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn generate_id(&mut self) -> T::Id {
        // Skip ids already taken by explicit creates.
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }

    fn publish(&mut self) {
        let store = &self.store;
        self.subscribers
            .retain(|subscriber| subscriber.publish(store.values()));
    }
}
