//! # Store Errors
//!
//! Errors shared by every collection actor and client. Document-specific
//! failures raised from hooks are boxed into [`StoreError::DocumentError`].

/// Errors that can occur within the document store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection actor closed")]
    ActorClosed,
    #[error("Collection actor dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document already exists: {0}")]
    AlreadyExists(String),
    #[error("Document error: {0}")]
    DocumentError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the typed hook error of a [`StoreError::DocumentError`].
    ///
    /// Any other variant, or a hook error of a different type, is handed back
    /// unchanged.
    pub fn downcast<E: std::error::Error + 'static>(self) -> Result<E, Self> {
        match self {
            StoreError::DocumentError(e) => e
                .downcast::<E>()
                .map(|e| *e)
                .map_err(StoreError::DocumentError),
            other => Err(other),
        }
    }
}
