//! Authentication API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Authentication endpoint errors.
#[derive(Debug, Error)]
pub enum ApiAuthError {
    /// Malformed input.
    #[error("{0}")]
    Validation(String),

    /// Bad username or password. Deliberately one message for both so
    /// responses do not reveal which part was wrong.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Duplicate username, email or full name.
    #[error("{0}")]
    Conflict(String),

    /// Missing, invalid or expired token or API key.
    #[error("{0}")]
    Unauthenticated(String),

    /// Hashing, signing or other internal failure. Detail is logged
    /// server-side; callers get a generic message.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Persistence failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiAuthError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiAuthError::Validation(_)
            | ApiAuthError::InvalidCredentials
            | ApiAuthError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiAuthError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiAuthError::Internal(_) | ApiAuthError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiAuthError::Database(e) => {
                tracing::error!("Database error: {e}");
                "Internal server error".to_string()
            }
            ApiAuthError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { error: message };
        (status, axum::Json(body)).into_response()
    }
}

impl From<stayline_auth::AuthError> for ApiAuthError {
    /// Default mapping for credential-primitive failures.
    ///
    /// Expected verification mismatches never reach this conversion (they
    /// surface as `Ok(false)` or are mapped explicitly at the call site),
    /// so anything arriving here is internal.
    fn from(err: stayline_auth::AuthError) -> Self {
        ApiAuthError::Internal(err.to_string())
    }
}
