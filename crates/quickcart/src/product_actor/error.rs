//! Error types for the catalog collection.

use crate::model::ValidationError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data failed validation.
    #[error("Product validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the collection.
    #[error("Collection communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
