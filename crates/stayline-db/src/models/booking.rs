//! Booking entity model.
//!
//! Bookings hold half-open date ranges: a booking occupies its room from
//! `check_in` (inclusive) to `check_out` (exclusive), so back-to-back
//! stays sharing a turnover day do not conflict.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use stayline_core::BookingId;
use uuid::Uuid;

/// A room booking.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking joined with its room name, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingWithRoom {
    pub id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_name: String,
}

/// Fields required to insert a booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub phone: Option<String>,
}

impl Booking {
    /// Get the booking ID as a typed `BookingId`.
    #[must_use]
    pub fn booking_id(&self) -> BookingId {
        BookingId::from_uuid(self.id)
    }

    /// Find any existing booking that overlaps the given range.
    ///
    /// Two half-open ranges overlap when each starts before the other
    /// ends. Returns the conflicting booking ID, if any.
    pub async fn find_conflicting(
        pool: &PgPool,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Option<Uuid>, sqlx::Error> {
        sqlx::query_scalar(
            r"
            SELECT id FROM bookings
            WHERE room_id = $1 AND check_in < $3 AND check_out > $2
            LIMIT 1
            ",
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_optional(pool)
        .await
    }

    /// Insert a booking and return the stored row.
    pub async fn create(pool: &PgPool, input: CreateBooking) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO bookings (id, user_id, room_id, check_in, check_out, phone,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING *
            ",
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(input.room_id)
        .bind(input.check_in)
        .bind(input.check_out)
        .bind(&input.phone)
        .fetch_one(pool)
        .await
    }

    /// List all bookings with their room names, soonest check-in first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BookingWithRoom>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT b.id, b.check_in, b.check_out, r.room_name
            FROM bookings b
            JOIN rooms r ON r.id = b.room_id
            ORDER BY b.check_in
            ",
        )
        .fetch_all(pool)
        .await
    }

    /// List a user's bookings, soonest check-in first.
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM bookings WHERE user_id = $1 ORDER BY check_in")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a room's bookings, soonest check-in first.
    pub async fn list_by_room(pool: &PgPool, room_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM bookings WHERE room_id = $1 ORDER BY check_in")
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a booking. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
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
