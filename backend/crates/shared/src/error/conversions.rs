//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from storage errors to [`AppError`],
//! and the JSON error envelope used by every HTTP response.

use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL specific error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 23 — Integrity Constraint Violation
                    Some("23502") => AppError::unprocessable("Required field is null"),
                    Some("23503") => AppError::unprocessable("Referenced record does not exist"),
                    Some("23505") => AppError::unprocessable("Duplicate key value"),
                    Some("23514") => AppError::unprocessable("Check constraint violation"),
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            // Pool timeouts and connection loss surface as plain server errors
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Error envelope shared by every failing endpoint.
///
/// `error` carries the numeric status so clients can branch on it without
/// inspecting the HTTP status line.
#[cfg(feature = "axum")]
#[derive(Debug, serde::Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: u16,
    pub message: &'a str,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
