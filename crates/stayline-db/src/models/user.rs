//! User entity model.
//!
//! A user account carries its password hash and the hash of its current
//! API key. The API key expiry is the long-lived revocation control:
//! per-request authentication re-reads it from this row, so overwriting
//! it takes effect immediately.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use stayline_core::UserId;
use uuid::Uuid;

/// A user account.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,

    /// User's first name.
    pub first_name: String,

    /// User's last name.
    pub last_name: String,

    /// Concatenated display name (unique).
    pub full_name: String,

    /// User's email address (unique).
    pub email: String,

    /// Login username (unique).
    pub username: String,

    /// Argon2id password hash. Never the plaintext.
    pub password_hash: String,

    /// Argon2id hash of the current API key, or the `expired-` sentinel
    /// after signout. Never the plaintext.
    pub api_key_hash: String,

    /// When the API key stops being valid.
    pub api_key_expires_at: DateTime<Utc>,
}

/// Fields required to insert a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub api_key_hash: String,
    pub api_key_expires_at: DateTime<Utc>,
}

impl User {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// Check whether the API key validity window has elapsed.
    #[must_use]
    pub fn api_key_expired(&self) -> bool {
        self.api_key_expires_at <= Utc::now()
    }

    /// Find a user by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by the stored hash of their API key.
    ///
    /// Only useful at issuance time, when the caller holds the exact
    /// digest that was just written.
    pub async fn find_by_api_key_hash(
        pool: &PgPool,
        api_key_hash: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE api_key_hash = $1")
            .bind(api_key_hash)
            .fetch_optional(pool)
            .await
    }

    /// Check if a username is already taken.
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(pool)
            .await?;

        Ok(count > 0)
    }

    /// Check if an email is already registered.
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await?;

        Ok(count > 0)
    }

    /// Check if a full name is already registered.
    pub async fn full_name_exists(pool: &PgPool, full_name: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE full_name = $1")
            .bind(full_name)
            .fetch_one(pool)
            .await?;

        Ok(count > 0)
    }

    /// Insert a new user row.
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<(), sqlx::Error> {
        sqlx::query(
            r"
            INSERT INTO users (id, created_at, updated_at, first_name, last_name, full_name,
                               email, username, password_hash, api_key_hash, api_key_expires_at)
            VALUES ($1, NOW(), NOW(), $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(input.id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.username)
        .bind(&input.password_hash)
        .bind(&input.api_key_hash)
        .bind(input.api_key_expires_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Replace a user's API key hash and expiry.
    ///
    /// Always runs inside a transaction: the key rotation must commit or
    /// roll back together with the session write it accompanies.
    pub async fn update_api_key_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        api_key_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET api_key_hash = $2, api_key_expires_at = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(user_id)
        .bind(api_key_hash)
        .bind(expires_at)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_user(api_key_expires_at: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            full_name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice_01".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            api_key_hash: "$argon2id$stub".to_string(),
            api_key_expires_at,
        }
    }

    #[test]
    fn live_api_key_is_not_expired() {
        let user = test_user(Utc::now() + Duration::days(30));
        assert!(!user.api_key_expired());
    }

    #[test]
    fn elapsed_api_key_is_expired() {
        let user = test_user(Utc::now() - Duration::seconds(1));
        assert!(user.api_key_expired());
    }

    #[test]
    fn typed_id_accessor() {
        let user = test_user(Utc::now());
        assert_eq!(user.user_id().as_uuid(), &user.id);
    }

    // Query functions require a database and are covered by integration tests.
}
