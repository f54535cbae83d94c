//! Error types for the user profile collection.

use thiserror::Error;

/// Errors raised by the profile collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No profile is stored under the uid.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The profile payload was rejected.
    #[error("Invalid profile: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the collection.
    #[error("Collection communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
