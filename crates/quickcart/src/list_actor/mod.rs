//! # Shopping List Actor
//!
//! Persisted shopping lists. Each list belongs to exactly one user; a live
//! query per user keeps the session's "all lists" view current.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for [`ShoppingList`]
//! - [`error`] - [`ListError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is a [`UserClient`](crate::clients::UserClient), used to
//! verify list owners:
//!
//! ```rust,ignore
//! let (list_actor, list_client) = list_actor::new(32);
//! tokio::spawn(list_actor.run(user_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ListClient;
use crate::model::ShoppingList;
use docstore::DocumentActor;

/// Creates a new ShoppingList actor and its client.
pub fn new(buffer_size: usize) -> (DocumentActor<ShoppingList>, ListClient) {
    let (actor, generic_client) = DocumentActor::new(buffer_size);
    (actor, ListClient::new(generic_client))
}
