//! # Document Trait
//!
//! The contract every stored record (product, user profile, shopping list, ...)
//! implements so that one generic [`DocumentActor`](crate::DocumentActor) can
//! manage a whole collection of it.
//!
//! Associated types keep each collection's payloads apart: a list collection
//! only accepts `ShoppingListCreate`, never a `ProductCreate`.
//!
//! # Provided Methods (Hooks)
//! [`Document::on_create`] and [`Document::on_delete`] default to `Ok(())`.
//! Implement them only when the collection needs validation or side effects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record that can be held by a [`DocumentActor`](crate::DocumentActor).
///
/// # Async & Context
/// Hooks are async so they can call other collections. The `Context` type is
/// handed to `run()` rather than `new()`, so collections that depend on each
/// other can be wired after all of them exist.
#[async_trait]
pub trait Document: Clone + Send + Sync + 'static {
    /// Identifier of a document within its collection.
    ///
    /// `Ord` gives snapshots a stable order. `From<u32>` is used when the
    /// store assigns the id itself.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a document.
    type Create: Send + Sync + Debug;

    /// Partial update. Every field should be optional so that writes only
    /// touch what the caller names.
    type Update: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// Error raised by hooks; boxed into [`StoreError::DocumentError`](crate::StoreError::DocumentError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the document from its id and creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the document is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a partial update in place.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Runs before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
