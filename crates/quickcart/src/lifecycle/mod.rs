//! # System Lifecycle
//!
//! Creates the three collections, wires them together and shuts them down.
//!
//! ## Wiring
//!
//! Collections are created without dependencies and receive them when they
//! start, through `run(context)`:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(buffer_size);
//! let (list_actor, list_client) = list_actor::new(buffer_size);
//!
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(list_actor.run(user_client.clone()));
//! ```
//!
//! ## Shutdown
//!
//! Dropping every client closes a collection's channel and ends its task.
//! The list collection holds a `UserClient`, so the user collection stops
//! after it. Sessions hold clients too and must be dropped first.

pub mod seed;
pub mod shop_system;

pub use seed::{sample_catalog, seed_catalog};
pub use shop_system::ShopSystem;
