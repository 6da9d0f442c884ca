//! API error handling
//!
//! Query failures become localized JSON bodies. Internal errors are logged
//! and answered with a generic message so no implementation detail leaks.

use application::{Locale, QueryError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid input (blank or oversized city)
    #[error("{message}")]
    BadRequest { title: String, message: String },

    /// Provider does not know the city
    #[error("{message}")]
    NotFound { title: String, message: String },

    /// Provider failed or was unreachable
    #[error("{message}")]
    BadGateway { title: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Localized short title
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    /// Localized explanation for the user
    pub message: String,
}

impl ApiError {
    /// Map a query failure to its HTTP form
    #[must_use]
    pub fn from_query(err: &QueryError, locale: Locale) -> Self {
        let title = err.title(locale).to_string();
        let message = err.user_message(locale).to_string();
        match err {
            QueryError::Validation { .. } => Self::BadRequest { title, message },
            QueryError::NotFound { .. } => Self::NotFound { title, message },
            QueryError::Transient { .. } => Self::BadGateway { title, message },
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "validation",
            Self::NotFound { .. } => "not_found",
            Self::BadGateway { .. } => "transient",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<infrastructure::TemplateError> for ApiError {
    fn from(e: infrastructure::TemplateError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();
        let body = match self {
            Self::BadRequest { title, message }
            | Self::NotFound { title, message }
            | Self::BadGateway { title, message } => ErrorResponse {
                error: title,
                code,
                message,
            },
            Self::Internal(detail) => {
                error!(error = %detail, "Internal error while handling request");
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    code,
                    message: "An error occurred processing your request".to_string(),
                }
            },
        };

        (status, Json(body)).into_response()
    }
}
