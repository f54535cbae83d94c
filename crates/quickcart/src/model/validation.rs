//! Local validation performed before any collection is contacted.

use thiserror::Error;

/// A required field is missing or a value is out of range.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("quantity {0} plus {1} is too large")]
    QuantityOverflow(i32, i32),
}
