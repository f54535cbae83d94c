//! Errors returned by [`ShopSession`](super::ShopSession) operations.

use crate::identity::IdentityError;
use crate::list_actor::ListError;
use crate::model::{ListId, ValidationError};
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("no user is signed in")]
    NotSignedIn,

    #[error("no shopping list is open")]
    NoCurrentList,

    #[error("catalog management requires an admin account")]
    NotAuthorized,

    #[error("shopping list {0} belongs to another user")]
    NotOwner(ListId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    List(#[from] ListError),
}
