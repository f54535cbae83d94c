//! Typed clients wrapping the generic [`DocumentClient`](docstore::DocumentClient)
//! of each collection.

pub mod list_client;
pub mod product_client;
pub mod user_client;

pub use list_client::ListClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
