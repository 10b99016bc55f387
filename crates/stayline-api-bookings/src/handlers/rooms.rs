//! Room endpoint handlers.

use crate::dates::booked_dates;
use crate::error::ApiBookingError;
use crate::handlers::validate_request;
use crate::models::{CalendarResponse, MessageResponse, RoomRequest};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use sqlx::PgPool;
use stayline_db::{Booking, CreateRoom, Room, UpdateRoom};
use uuid::Uuid;

/// List all rooms.
#[utoipa::path(
    get,
    path = "/api/rooms",
    responses(
        (status = 200, description = "All rooms, newest first"),
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<Room>>, ApiBookingError> {
    let rooms = Room::list_all(&pool).await?;
    Ok(Json(rooms))
}

/// Create a room.
#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = RoomRequest,
    responses(
        (status = 201, description = "Room created"),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated"),
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    Extension(pool): Extension<PgPool>,
    Json(request): Json<RoomRequest>,
) -> Result<(StatusCode, Json<Room>), ApiBookingError> {
    validate_request(&request)?;

    let room = Room::create(
        &pool,
        CreateRoom {
            room_name: request.room_name,
            description: request.description,
            price: request.price,
            max_guests: request.max_guests,
        },
    )
    .await?;

    tracing::info!(room_id = %room.id, "Room created");

    Ok((StatusCode::CREATED, Json(room)))
}

/// Get a room by ID.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room"),
        (status = 404, description = "Room not found"),
    ),
    tag = "Rooms"
)]
pub async fn get_room(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<Room>, ApiBookingError> {
    let room = Room::find_by_id(&pool, id)
        .await?
        .ok_or(ApiBookingError::NotFound("Room"))?;

    Ok(Json(room))
}

/// Update a room.
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "The updated room"),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Room not found"),
    ),
    tag = "Rooms"
)]
pub async fn update_room(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
    Json(request): Json<RoomRequest>,
) -> Result<Json<Room>, ApiBookingError> {
    validate_request(&request)?;

    let room = Room::update(
        &pool,
        id,
        UpdateRoom {
            room_name: request.room_name,
            description: request.description,
            price: request.price,
            max_guests: request.max_guests,
        },
    )
    .await?
    .ok_or(ApiBookingError::NotFound("Room"))?;

    tracing::info!(room_id = %room.id, "Room updated");

    Ok(Json(room))
}

/// Delete a room.
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted"),
        (status = 404, description = "Room not found"),
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiBookingError> {
    let removed = Room::delete(&pool, id).await?;
    if removed == 0 {
        return Err(ApiBookingError::NotFound("Room"));
    }

    tracing::info!(room_id = %id, "Room deleted");

    Ok(Json(MessageResponse::new("Room deleted successfully")))
}

/// Get the occupied dates of a room.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/calendar",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Occupied dates", body = CalendarResponse),
        (status = 404, description = "Room not found"),
    ),
    tag = "Rooms"
)]
pub async fn room_calendar(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<CalendarResponse>, ApiBookingError> {
    Room::find_by_id(&pool, id)
        .await?
        .ok_or(ApiBookingError::NotFound("Room"))?;

    let bookings = Booking::list_by_room(&pool, id).await?;
    let stays: Vec<_> = bookings.iter().map(|b| (b.check_in, b.check_out)).collect();

    Ok(Json(CalendarResponse {
        dates: booked_dates(&stays),
    }))
}

/// List the bookings of a room.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/bookings",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room's bookings"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Room not found"),
    ),
    tag = "Rooms"
)]
pub async fn room_bookings(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, ApiBookingError> {
    Room::find_by_id(&pool, id)
        .await?
        .ok_or(ApiBookingError::NotFound("Room"))?;

    let bookings = Booking::list_by_room(&pool, id).await?;
    Ok(Json(bookings))
}

#[cfg(test)]
mod tests {
    // Handlers run against Postgres and are covered by integration tests.
}
