//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`. Client-facing bodies are JSON and never carry
//! internal detail; the underlying error goes to logs and Sentry only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration store access failed. `context` is the safe,
    /// client-facing message; the source stays server-side.
    #[error("{context}: {source}")]
    Store {
        /// Client-facing message.
        context: &'static str,
        /// Underlying repository failure.
        #[source]
        source: RepositoryError,
    },

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Caller has no authenticated shop session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wrap a repository failure with a client-safe message.
    #[must_use]
    pub const fn store(context: &'static str, source: RepositoryError) -> Self {
        Self::Store { context, source }
    }
}

/// JSON error body, `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store { .. } | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        // Don't expose internal error details to clients
        let error = match self {
            Self::Store { context, .. } => context.to_owned(),
            Self::Internal(_) => "Internal server error".to_owned(),
            Self::BadRequest(msg) => msg,
            Self::Unauthorized => "Unauthorized".to_owned(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn store_error() -> AppError {
        AppError::store(
            "Failed to fetch message",
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
        )
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        assert!(store_error().to_string().starts_with("Failed to fetch message:"));
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(store_error()), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
    }
}
