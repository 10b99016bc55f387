//! Database entity models.

pub mod booking;
pub mod room;
pub mod session;
pub mod user;

pub use booking::{Booking, BookingWithRoom, CreateBooking};
pub use room::{CreateRoom, Room, UpdateRoom};
pub use session::{SessionRecord, UpsertSession};
pub use user::{CreateUser, User};
