//! Rooms and bookings endpoint handlers.

pub mod bookings;
pub mod rooms;

pub use bookings::{create_booking, delete_booking, list_bookings, my_bookings};
pub use rooms::{
    create_room, delete_room, get_room, list_rooms, room_bookings, room_calendar, update_room,
};

use crate::error::ApiBookingError;
use validator::Validate;

/// Run validator-derive checks, flattening field errors into one message.
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), ApiBookingError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        ApiBookingError::Validation(errors.join(", "))
    })
}
