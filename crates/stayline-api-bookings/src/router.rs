//! Rooms and bookings router configuration.
//!
//! Routes (nested under `/api` by the caller):
//! - GET    /rooms (public)
//! - GET    /rooms/:id/calendar (public)
//! - POST   /rooms
//! - GET    /rooms/:id
//! - PUT    /rooms/:id
//! - DELETE /rooms/:id
//! - GET    /rooms/:id/bookings
//! - POST   /bookings
//! - GET    /bookings
//! - GET    /bookings/me
//! - DELETE /bookings/:id
//!
//! Everything except the room listing and the calendar sits behind the
//! cookie authentication middleware.

use crate::handlers::{
    create_booking, create_room, delete_booking, delete_room, get_room, list_bookings, list_rooms,
    my_bookings, room_bookings, room_calendar, update_room,
};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;
use stayline_api_auth::{cookie_auth_middleware, AuthSettings};

/// Shared state for the rooms and bookings routes.
#[derive(Clone)]
pub struct BookingsState {
    pub pool: PgPool,
    pub settings: Arc<AuthSettings>,
}

/// Create the rooms and bookings router.
pub fn bookings_router(state: BookingsState) -> Router {
    let public_routes = Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/:id/calendar", get(room_calendar));

    let protected_routes = Router::new()
        .route("/rooms", post(create_room))
        .route("/rooms/:id", get(get_room))
        .route("/rooms/:id", put(update_room))
        .route("/rooms/:id", delete(delete_room))
        .route("/rooms/:id/bookings", get(room_bookings))
        .route("/bookings", post(create_booking))
        .route("/bookings", get(list_bookings))
        .route("/bookings/me", get(my_bookings))
        .route("/bookings/:id", delete(delete_booking))
        .layer(middleware::from_fn(cookie_auth_middleware));

    public_routes
        .merge(protected_routes)
        .layer(Extension(state.pool))
        .layer(Extension(state.settings))
}
