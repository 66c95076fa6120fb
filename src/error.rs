//! Application error taxonomy and HTTP mapping.
//!
//! Client-facing errors (validation, unknown codes) carry a human-readable
//! message. Server-facing errors are logged in full and surfaced to the
//! caller only as a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body: `{ "error": "<message>" }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Empty or missing URL in a shorten request.
    #[error("URL is required")]
    EmptyUrl,

    /// Input that does not parse as an absolute http/https URL.
    #[error("please provide a valid URL")]
    InvalidUrl { reason: String },

    /// Resolution of a code that was never issued.
    #[error("shortened URL does not exist")]
    NotFound { code: String },

    /// Insert-if-absent lost to an existing code. Internal only: the
    /// shortening service retries with a fresh code and never surfaces this.
    #[error("short code already exists: {code}")]
    AlreadyExists { code: String },

    /// The generator kept colliding past the retry ceiling. Operational
    /// alarm; should not occur with the counter-based generator.
    #[error("failed to generate a unique short code")]
    GenerationExhausted,

    /// Unexpected store or runtime failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true for errors caused by client input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyUrl | AppError::InvalidUrl { .. } | AppError::NotFound { .. }
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::EmptyUrl => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidUrl { reason } => {
                tracing::warn!(reason = %reason, "rejected invalid URL");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::AlreadyExists { .. }
            | AppError::GenerationExhausted
            | AppError::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "something went wrong, please try again".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
