//! # User Actor
//!
//! Profiles of signed-up users, keyed by the uid the identity provider issued.
//! The profile carries the `is_admin` flag that gates catalog management.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use docstore::DocumentActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (DocumentActor<User>, UserClient) {
    let (actor, generic_client) = DocumentActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
