//! Application-level errors

use domain::{CityName, DomainError};
use serde::Serialize;
use thiserror::Error;

use crate::messages::Locale;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Requested entity does not exist at the provider
    #[error("Not found: {0}")]
    NotFound(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// User-facing outcome of a failed weather query
///
/// Every failure a user can trigger collapses into one of three kinds so the
/// UI can pick the right message. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryError {
    /// Input rejected locally; no request was made
    #[error("Invalid city: {reason}")]
    Validation { reason: String },

    /// Provider says the city does not exist
    #[error("City not found: {city}")]
    NotFound { city: String },

    /// Any other failure (network, parsing, rate limit, malformed response)
    #[error("Weather lookup failed: {reason}")]
    Transient { reason: String },
}

impl QueryError {
    /// Classify an application error raised while querying `city`
    #[must_use]
    pub fn from_application(err: ApplicationError, city: &CityName) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::Validation {
                reason: e.to_string(),
            },
            ApplicationError::NotFound(_) => Self::NotFound {
                city: city.to_string(),
            },
            other => Self::Transient {
                reason: other.to_string(),
            },
        }
    }

    /// Stable machine-readable kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::NotFound { .. } => "not_found",
            Self::Transient { .. } => "transient",
        }
    }

    /// Short localized heading for the error notice
    #[must_use]
    pub fn title(&self, locale: Locale) -> &'static str {
        let messages = locale.messages();
        match self {
            Self::Validation { .. } => messages.validation_title,
            Self::NotFound { .. } | Self::Transient { .. } => messages.error_title,
        }
    }

    /// Localized message shown to the user
    #[must_use]
    pub fn user_message(&self, locale: Locale) -> &'static str {
        let messages = locale.messages();
        match self {
            Self::Validation { .. } => messages.validation_body,
            Self::NotFound { .. } => messages.not_found_body,
            Self::Transient { .. } => messages.transient_body,
        }
    }
}

impl From<DomainError> for QueryError {
    fn from(err: DomainError) -> Self {
        Self::Validation {
            reason: err.to_string(),
        }
    }
}
