//! # Live Queries
//!
//! A [`Subscription`] is the receiving end of a live query. The collection
//! actor pushes a fresh [`Snapshot`] after every successful write; readers only
//! ever see whole, immutable result sets.

use crate::error::StoreError;
use crate::message::Filter;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable result set delivered by a live query.
pub type Snapshot<T> = Arc<[T]>;

/// Receiving side of a live query.
pub struct Subscription<T> {
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T> Subscription<T> {
    pub fn new(receiver: watch::Receiver<Snapshot<T>>) -> Self {
        Self { receiver }
    }

    /// The most recent result set, without waiting.
    pub fn current(&self) -> Snapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next result set.
    ///
    /// Fails with [`StoreError::ActorClosed`] once the collection shuts down.
    pub async fn changed(&mut self) -> Result<Snapshot<T>, StoreError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }
}

/// Sending side, owned by the collection actor.
pub(crate) struct Subscriber<T> {
    filter: Filter<T>,
    sender: watch::Sender<Snapshot<T>>,
}

impl<T: Clone> Subscriber<T> {
    /// Opens a live query seeded with the documents that match `filter`.
    pub(crate) fn open<'a>(
        filter: Filter<T>,
        documents: impl Iterator<Item = &'a T>,
    ) -> (Self, Subscription<T>)
    where
        T: 'a,
    {
        let initial = select(&filter, documents);
        let (sender, receiver) = watch::channel(initial);
        (Self { filter, sender }, Subscription::new(receiver))
    }

    /// Pushes a new result set. Returns `false` once every receiver is gone.
    pub(crate) fn publish<'a>(&self, documents: impl Iterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        self.sender.send(select(&self.filter, documents)).is_ok()
    }
}

fn select<'a, T: Clone + 'a>(filter: &Filter<T>, documents: impl Iterator<Item = &'a T>) -> Snapshot<T> {
    documents.filter(|doc| filter(doc)).cloned().collect()
}
