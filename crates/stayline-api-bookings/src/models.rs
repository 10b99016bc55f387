//! Request and response DTOs for the rooms and bookings endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload for creating or replacing a room.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RoomRequest {
    /// Display name of the room.
    #[validate(length(min = 1, max = 200, message = "Room name must be 1-200 characters"))]
    pub room_name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Price per night.
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    /// Maximum number of guests.
    #[validate(range(min = 1, message = "Room must hold at least one guest"))]
    pub max_guests: i32,
}

/// Payload for creating a booking.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookingRequest {
    /// The room to book.
    pub room_id: uuid::Uuid,

    /// First occupied day.
    pub check_in: NaiveDate,

    /// Day of departure; not occupied.
    pub check_out: NaiveDate,

    /// Optional contact phone number.
    #[validate(length(max = 30, message = "Phone number too long"))]
    pub phone: Option<String>,
}

/// Occupied dates for a room.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarResponse {
    /// Sorted, deduplicated list of occupied days.
    pub dates: Vec<NaiveDate>,
}

/// Plain message response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

impl MessageResponse {
    /// Create a message response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_request_validates() {
        let request = RoomRequest {
            room_name: "Sea View Suite".into(),
            description: None,
            price: 120.0,
            max_guests: 2,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn room_request_rejects_empty_name_and_zero_guests() {
        let request = RoomRequest {
            room_name: String::new(),
            description: None,
            price: 120.0,
            max_guests: 0,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn booking_request_deserializes_dates() {
        let request: BookingRequest = serde_json::from_str(
            r#"{"room_id":"550e8400-e29b-41d4-a716-446655440000",
                "check_in":"2026-08-10","check_out":"2026-08-14"}"#,
        )
        .unwrap();

        assert_eq!(request.check_in.to_string(), "2026-08-10");
        assert!(request.phone.is_none());
    }
}
