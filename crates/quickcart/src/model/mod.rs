//! Plain records stored in the collections, plus their create and update payloads.

pub mod product;
pub mod shopping_list;
pub mod user;
pub mod validation;

pub use product::*;
pub use shopping_list::*;
pub use user::*;
pub use validation::*;
