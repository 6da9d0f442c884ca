//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// City input was empty or whitespace only
    #[error("City name must not be empty")]
    EmptyCityName,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
