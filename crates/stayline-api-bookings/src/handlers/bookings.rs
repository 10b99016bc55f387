//! Booking endpoint handlers.

use crate::dates::stay_is_valid;
use crate::error::ApiBookingError;
use crate::handlers::validate_request;
use crate::models::{BookingRequest, MessageResponse};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use sqlx::PgPool;
use stayline_db::{Booking, BookingWithRoom, CreateBooking, Room, User};
use uuid::Uuid;

/// Create a booking.
///
/// Checks room existence and availability; a stay that overlaps any
/// existing booking for the room is rejected with a conflict.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking created"),
        (status = 400, description = "Invalid dates"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room already booked for these dates"),
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    Extension(pool): Extension<PgPool>,
    Extension(user): Extension<User>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiBookingError> {
    validate_request(&request)?;

    if !stay_is_valid(request.check_in, request.check_out) {
        return Err(ApiBookingError::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }

    Room::find_by_id(&pool, request.room_id)
        .await?
        .ok_or(ApiBookingError::NotFound("Room"))?;

    if let Some(conflicting) =
        Booking::find_conflicting(&pool, request.room_id, request.check_in, request.check_out)
            .await?
    {
        tracing::debug!(
            room_id = %request.room_id,
            conflicting_booking = %conflicting,
            "Rejected overlapping booking"
        );
        return Err(ApiBookingError::RoomUnavailable);
    }

    let booking = Booking::create(
        &pool,
        CreateBooking {
            user_id: user.id,
            room_id: request.room_id,
            check_in: request.check_in,
            check_out: request.check_out,
            phone: request.phone,
        },
    )
    .await?;

    tracing::info!(booking_id = %booking.id, room_id = %booking.room_id, "Booking created");

    Ok((StatusCode::CREATED, Json(booking)))
}

/// List all bookings with their room names.
#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "All bookings"),
        (status = 401, description = "Not authenticated"),
    ),
    tag = "Bookings"
)]
pub async fn list_bookings(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<BookingWithRoom>>, ApiBookingError> {
    let bookings = Booking::list_all(&pool).await?;
    Ok(Json(bookings))
}

/// List the authenticated user's bookings.
#[utoipa::path(
    get,
    path = "/api/bookings/me",
    responses(
        (status = 200, description = "The caller's bookings"),
        (status = 401, description = "Not authenticated"),
    ),
    tag = "Bookings"
)]
pub async fn my_bookings(
    Extension(pool): Extension<PgPool>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Booking>>, ApiBookingError> {
    let bookings = Booking::list_by_user(&pool, user.id).await?;
    Ok(Json(bookings))
}

/// Delete a booking.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Booking not found"),
    ),
    tag = "Bookings"
)]
pub async fn delete_booking(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiBookingError> {
    let removed = Booking::delete(&pool, id).await?;
    if removed == 0 {
        return Err(ApiBookingError::NotFound("Booking"));
    }

    tracing::info!(booking_id = %id, "Booking deleted");

    Ok(Json(MessageResponse::new("Booking deleted successfully")))
}

#[cfg(test)]
mod tests {
    // Handlers run against Postgres and are covered by integration tests.
}
