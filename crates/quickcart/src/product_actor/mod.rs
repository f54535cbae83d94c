//! # Product Actor
//!
//! The store catalog. Admins add, edit and remove products; everyone else reads
//! it and searches it while building lists.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use quickcart::product_actor;
//! use quickcart::model::{Location, ProductCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Whole Milk".to_string(),
//!         serial_number: "P123".to_string(),
//!         category: "Dairy".to_string(),
//!         price: 2.99,
//!         quantity: 100,
//!         image: None,
//!         location: Location::new(0, 4, 2),
//!     };
//!     let id = client.create_product(params).await?;
//!     let found = client.suggest("milk").await?;
//!     assert_eq!(found[0].id, id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use docstore::DocumentActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (DocumentActor<Product>, ProductClient) {
    let (actor, generic_client) = DocumentActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
