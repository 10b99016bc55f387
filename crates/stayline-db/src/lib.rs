//! Database layer for stayline.
//!
//! Postgres models and queries via sqlx, with embedded versioned
//! migrations. Query functions live as associated functions on the model
//! structs; transaction-scoped variants take `&mut Transaction` and are
//! suffixed `_in_tx`.

pub mod error;
pub mod migrations;
pub mod models;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{Booking, BookingWithRoom, CreateBooking, CreateRoom, CreateUser, Room, SessionRecord, UpdateRoom, UpsertSession, User};
