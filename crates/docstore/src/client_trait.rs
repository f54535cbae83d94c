//! # CollectionClient Trait
//!
//! Gives collection-specific clients the common read and delete calls on top
//! of a generic [`DocumentClient`].
use crate::{Document, DocumentClient, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use docstore::{CollectionClient, Document, DocumentClient, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// impl From<String> for NoteError {
///     fn from(s: String) -> Self { NoteError(s) }
/// }
///
/// #[async_trait]
/// impl Document for Note {
///     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
///     type Context = (); type Error = NoteError;
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct NoteClient { inner: DocumentClient<Note> }
///
/// #[async_trait]
/// impl CollectionClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &DocumentClient<Note> { &self.inner }
///     fn map_error(e: StoreError) -> Self::Error { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait CollectionClient<T: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &DocumentClient<T>;

    /// Map store errors to the collection error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a document by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
