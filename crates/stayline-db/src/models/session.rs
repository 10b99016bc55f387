//! Session record entity model.
//!
//! One row per signed-in user, tracking the current refresh token and the
//! token expiries. Signin replaces the row atomically via upsert; refresh
//! extends the existing row only.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use stayline_core::{SessionId, UserId};
use uuid::Uuid;

/// A per-user session record.
#[derive(Debug, Clone, FromRow)]
pub struct SessionRecord {
    /// Unique identifier for this record.
    pub id: Uuid,

    /// The owning user. Unique: a user has at most one session row.
    pub user_id: Uuid,

    /// Expiry of the most recently issued access token.
    pub access_token_expires_at: DateTime<Utc>,

    /// The current refresh token value (a signed token string).
    pub refresh_token: String,

    /// When the refresh token stops being accepted.
    pub refresh_token_expires_at: DateTime<Utc>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields for the signin/signup session upsert.
#[derive(Debug, Clone)]
pub struct UpsertSession {
    pub user_id: Uuid,
    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Get the record ID as a typed `SessionId`.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        SessionId::from_uuid(self.id)
    }

    /// Get the owning user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.user_id)
    }

    /// Check whether the refresh token validity window has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.refresh_token_expires_at <= Utc::now()
    }

    /// Find a session by its refresh token value.
    pub async fn find_by_refresh_token(
        pool: &PgPool,
        refresh_token: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM sessions WHERE refresh_token = $1")
            .bind(refresh_token)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the session row for a user.
    ///
    /// A single atomic statement keyed on `user_id`, safe under
    /// concurrent first-signin for the same user.
    pub async fn upsert_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        input: UpsertSession,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r"
            INSERT INTO sessions (id, user_id, access_token_expires_at, refresh_token,
                                  refresh_token_expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET access_token_expires_at = EXCLUDED.access_token_expires_at,
                refresh_token = EXCLUDED.refresh_token,
                refresh_token_expires_at = EXCLUDED.refresh_token_expires_at,
                updated_at = NOW()
            ",
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(input.access_token_expires_at)
        .bind(&input.refresh_token)
        .bind(input.refresh_token_expires_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Extend an existing session row, keeping its refresh token value.
    ///
    /// Returns the number of rows affected. Unlike the upsert this never
    /// creates a row: refresh must not re-issue a session from nothing.
    pub async fn touch_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        access_token_expires_at: DateTime<Utc>,
        refresh_token_expires_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE sessions
            SET access_token_expires_at = $2,
                refresh_token_expires_at = $3,
                updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .bind(access_token_expires_at)
        .bind(refresh_token_expires_at)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}
