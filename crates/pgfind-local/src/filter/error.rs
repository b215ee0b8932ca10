//! Error types for filter criteria.

use thiserror::Error;

/// A specialized Result type for criteria updates.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur when updating filter criteria.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    /// A minimum rating outside `[0, 5]` (or not a number) was requested.
    #[error("invalid minimum rating: {value} (expected 0-5)")]
    InvalidRating {
        /// The rejected value.
        value: f64,
    },
}

impl FilterError {
    /// Creates an invalid rating error.
    pub fn invalid_rating(value: f64) -> Self {
        FilterError::InvalidRating { value }
    }
}
