//! # Generic Messages
//!
//! Requests sent from a [`DocumentClient`](crate::DocumentClient) to a
//! [`DocumentActor`](crate::DocumentActor).

use crate::document::Document;
use crate::error::StoreError;
use crate::subscription::Subscription;
use std::sync::Arc;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Predicate selecting which documents a live query delivers.
pub type Filter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Operations a collection understands.
///
/// The variants mirror what a hosted document database offers its clients:
///
/// - **Create**: with a caller-chosen id, or `None` to let the store assign one.
/// - **Get**: read one document by id.
/// - **List**: read the whole collection.
/// - **Update**: apply a partial [`Document::Update`].
/// - **Delete**: remove by id.
/// - **Subscribe**: open a live query that pushes the full filtered result
///   set on every change.
pub enum StoreRequest<T: Document> {
    Create {
        id: Option<T::Id>,
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Subscribe {
        filter: Filter<T>,
        respond_to: Response<Subscription<T>>,
    },
}
