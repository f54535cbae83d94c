//! # Generic Client
//!
//! The handle applications use to talk to a [`DocumentActor`](crate::DocumentActor).

use crate::document::Document;
use crate::error::StoreError;
use crate::message::{Filter, StoreRequest};
use crate::subscription::Subscription;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// ## DocumentClient
///
/// Forwards requests over an mpsc channel and awaits the answer on a oneshot
/// channel. It only holds a sender, so cloning is cheap and clones can be
/// shared across tasks.
pub struct DocumentClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Document> Clone for DocumentClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> DocumentClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Creates a document under a store-assigned id.
    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Create {
            id: None,
            params,
            respond_to,
        })
        .await
    }

    /// Creates a document under an id chosen by the caller.
    pub async fn create_with_id(&self, id: T::Id, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Create {
            id: Some(id),
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// Reads the whole collection, ordered by id.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    /// Opens a live query over the documents matching `filter`.
    pub async fn subscribe(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Subscription<T>, StoreError> {
        let filter: Filter<T> = Arc::new(filter);
        self.request(|respond_to| StoreRequest::Subscribe { filter, respond_to })
            .await
    }
}
