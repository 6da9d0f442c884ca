//! Weather client error types

use thiserror::Error;

/// Errors that can occur while talking to the weather provider
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Provider reported that the queried location does not exist
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response decoded but is missing required data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl WeatherError {
    /// Whether the provider denied the location's existence
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::CityNotFound(_))
    }
}
