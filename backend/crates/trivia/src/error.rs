//! Trivia Error Types
//!
//! This module provides trivia-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Trivia-specific result type alias
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Trivia-specific error variants
///
/// Validation failures are raised before any storage call. Storage failures
/// on writes are translated to `OperationFailed` by the use cases; read
/// failures surface as `Database` and are reported as a generic server error.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// Required field or value missing from the request
    #[error("{0}")]
    InvalidRequest(String),

    /// Referenced record does not exist, or the query legitimately found nothing
    #[error("{0}")]
    NotFound(String),

    /// Create/delete could not be completed by storage
    #[error("{0}")]
    OperationFailed(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        TriviaError::InvalidRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        TriviaError::NotFound(message.into())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::InvalidRequest(_) | TriviaError::OperationFailed(_) => {
                ErrorKind::UnprocessableEntity
            }
            TriviaError::NotFound(_) => ErrorKind::NotFound,
            TriviaError::Database(_) | TriviaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TriviaError::Database(e) => {
                tracing::error!(error = %e, "Trivia database error");
            }
            TriviaError::Internal(msg) => {
                tracing::error!(message = %msg, "Trivia internal error");
            }
            TriviaError::OperationFailed(msg) => {
                tracing::warn!(message = %msg, "Trivia write failed");
            }
            _ => {
                tracing::debug!(error = %self, "Trivia request rejected");
            }
        }
    }
}

impl From<TriviaError> for AppError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::Database(e) => AppError::from(e),
            other => {
                let kind = other.kind();
                AppError::new(kind, other.to_string())
            }
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            TriviaError::invalid_request("x").kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(
            TriviaError::OperationFailed("x".into()).kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(TriviaError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(
            TriviaError::Internal("x".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_database_error_hides_detail() {
        let app_err = AppError::from(TriviaError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(app_err.status_code(), 500);
        assert_eq!(app_err.public_message(), "Server error");
    }

    #[test]
    fn test_client_errors_keep_message() {
        let app_err = AppError::from(TriviaError::not_found("No more questions"));
        assert_eq!(app_err.status_code(), 404);
        assert_eq!(app_err.public_message(), "No more questions");
    }
}
