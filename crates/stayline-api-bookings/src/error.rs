//! Booking API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Rooms and bookings endpoint errors.
#[derive(Debug, Error)]
pub enum ApiBookingError {
    /// Malformed input.
    #[error("{0}")]
    Validation(String),

    /// Missing room or booking.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The requested stay overlaps an existing booking.
    #[error("Room is already booked for these dates")]
    RoomUnavailable,

    /// Internal failure. Detail is logged server-side.
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

impl ApiBookingError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiBookingError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiBookingError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiBookingError::RoomUnavailable => StatusCode::CONFLICT,
            ApiBookingError::Internal(_) | ApiBookingError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiBookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiBookingError::Database(e) => {
                tracing::error!("Database error: {e}");
                "Internal server error".to_string()
            }
            ApiBookingError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { error: message };
        (status, axum::Json(body)).into_response()
    }
}
