//! User registration and credential verification.

use crate::error::ApiAuthError;
use crate::services::validation::{validate_email, validate_password, validate_username};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use stayline_auth::{generate_and_hash_api_key, CredentialHasher};
use stayline_db::{CreateUser, User};
use uuid::Uuid;

/// How long a freshly issued API key remains valid.
pub const API_KEY_VALIDITY_DAYS: i64 = 30;

/// Registration input after request decoding.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Service for user account operations.
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    hasher: CredentialHasher,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            hasher: CredentialHasher::default(),
        }
    }

    /// Register a new user.
    ///
    /// Validates formats, enforces username/email/full-name uniqueness,
    /// hashes the password, issues the initial API key (30 days) and
    /// persists the row. The plaintext API key is discarded after
    /// hashing; only the digest is stored.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::Validation` on malformed input
    /// - `ApiAuthError::Conflict` on duplicate username/email/full name
    /// - `ApiAuthError::Internal` on hashing or key generation failure
    pub async fn register(&self, input: RegisterInput) -> Result<User, ApiAuthError> {
        validate_username(&input.username)?;
        validate_email(&input.email)?;
        validate_password(&input.password)?;

        if User::username_exists(&self.pool, &input.username).await? {
            return Err(ApiAuthError::Conflict(
                "Username already exists".to_string(),
            ));
        }

        if User::email_exists(&self.pool, &input.email).await? {
            return Err(ApiAuthError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let full_name = format!("{} {}", input.first_name, input.last_name);
        if User::full_name_exists(&self.pool, &full_name).await? {
            return Err(ApiAuthError::Conflict(
                "An account with this name already exists".to_string(),
            ));
        }

        let password_hash = self.hasher.hash(&input.password)?;

        // The plaintext key is dropped here; only its digest survives.
        let (_api_key, api_key_hash) = generate_and_hash_api_key(&self.hasher)?;
        let api_key_expires_at = Utc::now() + Duration::days(API_KEY_VALIDITY_DAYS);

        User::create(
            &self.pool,
            CreateUser {
                id: Uuid::new_v4(),
                first_name: input.first_name,
                last_name: input.last_name,
                full_name,
                email: input.email,
                username: input.username,
                password_hash,
                api_key_hash: api_key_hash.clone(),
                api_key_expires_at,
            },
        )
        .await?;

        // Issuance protocol: read the stored row back through the key
        // digest written above.
        let user = User::find_by_api_key_hash(&self.pool, &api_key_hash)
            .await?
            .ok_or_else(|| {
                ApiAuthError::Internal("Created user row not found by API key hash".to_string())
            })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Verify a username/password pair.
    ///
    /// Fails closed with one generic error for both unknown-username and
    /// wrong-password so responses cannot be used to enumerate accounts.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::InvalidCredentials` on any mismatch
    /// - `ApiAuthError::Internal` if the stored hash is unreadable
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, ApiAuthError> {
        let user = User::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| {
                tracing::debug!("Signin attempt for unknown username");
                ApiAuthError::InvalidCredentials
            })?;

        let valid = self
            .hasher
            .verify(password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(user_id = %user.id, "Password verification error: {e}");
                ApiAuthError::Internal("Password verification failed".to_string())
            })?;

        if !valid {
            tracing::debug!(user_id = %user.id, "Invalid password attempt");
            return Err(ApiAuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    // Registration and credential verification run against Postgres and
    // are covered by the integration tests in tests/auth_flow_test.rs.
}
