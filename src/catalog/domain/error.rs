//! Error types for catalogue input validation.

use thiserror::Error;

/// Errors returned while constructing catalogue write requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// A required text field is empty after trimming.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// A numeric field is negative or not finite.
    #[error("{0} must be a non-negative number")]
    InvalidAmount(&'static str),
}
