//! # Docstore
//!
//! An in-process document database built on the actor model. Each collection
//! is a [`DocumentActor`] running in its own Tokio task; applications talk to
//! it through a cloneable [`DocumentClient`].
//!
//! ## What a collection offers
//!
//! - read one by id, read all
//! - create with a store-assigned id, or create under a caller-chosen id
//! - partial update through an explicit per-field update type
//! - delete by id
//! - live queries: a filtered [`Subscription`] that receives the full result
//!   set after every change
//!
//! ## Layers
//!
//! 1. **Document** ([`Document`]): the record type, its payloads and hooks.
//! 2. **Runtime** ([`DocumentActor`]): request loop and ownership of the data.
//! 3. **Interface** ([`DocumentClient`], [`CollectionClient`]): typed calls.
//!
//! ## Concurrency Model
//!
//! Requests to one collection are processed sequentially, so documents need no
//! locks. Different collections run in parallel. Hooks receive a `Context`
//! given to [`DocumentActor::run`], which is how one collection validates
//! against another (late binding).
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers client requests from a queue of expectations,
//! so code around a client can be tested without a running collection.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod subscription;
pub mod tracing;

pub use actor::DocumentActor;
pub use client::DocumentClient;
pub use client_trait::CollectionClient;
pub use document::Document;
pub use error::StoreError;
pub use message::{Filter, Response, StoreRequest};
pub use subscription::{Snapshot, Subscription};
