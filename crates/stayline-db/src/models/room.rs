//! Room entity model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use stayline_core::RoomId;
use uuid::Uuid;

/// A bookable room.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub max_guests: i32,
}

/// Fields required to insert a room.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub room_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub max_guests: i32,
}

/// Fields for updating a room.
#[derive(Debug, Clone)]
pub struct UpdateRoom {
    pub room_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub max_guests: i32,
}

impl Room {
    /// Get the room ID as a typed `RoomId`.
    #[must_use]
    pub fn room_id(&self) -> RoomId {
        RoomId::from_uuid(self.id)
    }

    /// Insert a room and return the stored row.
    pub async fn create(pool: &PgPool, input: CreateRoom) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO rooms (id, created_at, updated_at, room_name, description, price, max_guests)
            VALUES ($1, NOW(), NOW(), $2, $3, $4, $5)
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(&input.room_name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.max_guests)
        .fetch_one(pool)
        .await
    }

    /// List all rooms, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM rooms ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// Find a room by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a room. Returns the updated row if it exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: UpdateRoom,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            UPDATE rooms
            SET room_name = $2, description = $3, price = $4, max_guests = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(&input.room_name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.max_guests)
        .fetch_optional(pool)
        .await
    }

    /// Delete a room. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Query functions require a database and are covered by integration tests.
}
