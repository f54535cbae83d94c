//! Error types for the shopping list collection.

use crate::model::ValidationError;
use thiserror::Error;

/// Errors that can occur during shopping list operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListError {
    /// The requested list was not found.
    #[error("Shopping list not found: {0}")]
    NotFound(String),

    /// The owner named on the list has no profile.
    #[error("Invalid owner: {0}")]
    InvalidOwner(String),

    /// The list data failed validation.
    #[error("Shopping list validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the collection.
    #[error("Collection communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ListError {
    fn from(msg: String) -> Self {
        ListError::ActorCommunicationError(msg)
    }
}
