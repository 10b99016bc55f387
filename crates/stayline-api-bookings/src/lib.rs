//! Rooms and bookings API for stayline.
//!
//! CRUD over rooms and bookings with an availability check that rejects
//! overlapping stays for the same room. Everything except the room
//! listing and the calendar sits behind the cookie authentication
//! middleware from `stayline-api-auth`.

pub mod dates;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

pub use error::ApiBookingError;
pub use router::{bookings_router, BookingsState};
