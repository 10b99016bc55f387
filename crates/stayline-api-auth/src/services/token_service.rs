//! Session establishment, rotation and revocation.
//!
//! Owns the token validity windows and the transactional writes that keep
//! the user's API key and session record consistent: signin rotates both
//! inside one transaction, refresh extends the existing row only, signout
//! overwrites both with expired sentinels.

use crate::error::ApiAuthError;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use stayline_auth::{
    encode_token, generate_and_hash_api_key, revoked_api_key_sentinel, Claims, CredentialHasher,
    TokenConfig,
};
use stayline_core::UserId;
use stayline_db::{SessionRecord, UpsertSession, User};

/// Access token validity at signup, in minutes.
pub const SIGNUP_ACCESS_TOKEN_VALIDITY_MINUTES: i64 = 15;

/// Access token validity at signin and refresh, in hours.
pub const ACCESS_TOKEN_VALIDITY_HOURS: i64 = 1;

/// Refresh token validity, in days. Refresh rolls this window forward.
pub const REFRESH_TOKEN_VALIDITY_DAYS: i64 = 30;

/// API key validity granted by signin, in days.
pub const SIGNIN_API_KEY_VALIDITY_DAYS: i64 = 30;

/// API key validity granted by refresh, in days (three months).
pub const REFRESH_API_KEY_VALIDITY_DAYS: i64 = 90;

/// How far in the past revoked credentials are dated, in days.
pub const REVOKED_VALIDITY_DAYS: i64 = 365;

/// Signing secrets and token identity, built once at startup.
#[derive(Clone)]
pub struct AuthSettings {
    /// Secret keying the access-token MAC.
    pub access_secret: Vec<u8>,
    /// Secret keying the refresh-token MAC. Distinct from the access
    /// secret: the secret split is what separates the two token classes.
    pub refresh_secret: Vec<u8>,
    /// Issuer and audience stamped into and required of every token.
    pub token_config: TokenConfig,
}

impl AuthSettings {
    /// Create settings from the configured secrets and identity.
    #[must_use]
    pub fn new(
        access_secret: impl Into<Vec<u8>>,
        refresh_secret: impl Into<Vec<u8>>,
        token_config: TokenConfig,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            token_config,
        }
    }
}

/// A freshly minted access/refresh token pair with their expiries.
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Service for session lifecycle writes.
#[derive(Clone)]
pub struct TokenService {
    settings: AuthSettings,
    pool: PgPool,
    hasher: CredentialHasher,
}

impl TokenService {
    /// Create a new token service.
    #[must_use]
    pub fn new(settings: AuthSettings, pool: PgPool) -> Self {
        Self {
            settings,
            pool,
            hasher: CredentialHasher::default(),
        }
    }

    /// Mint an access token expiring at the given instant.
    fn mint_access_token(
        &self,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<String, ApiAuthError> {
        let claims = Claims::new(user_id, &self.settings.token_config, expires_at);

        encode_token(&claims, &self.settings.access_secret).map_err(|e| {
            tracing::error!("Failed to encode access token: {e}");
            ApiAuthError::Internal(format!("Token generation error: {e}"))
        })
    }

    /// Mint a refresh token expiring at the given instant.
    fn mint_refresh_token(
        &self,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<String, ApiAuthError> {
        let claims = Claims::new(user_id, &self.settings.token_config, expires_at);

        encode_token(&claims, &self.settings.refresh_secret).map_err(|e| {
            tracing::error!("Failed to encode refresh token: {e}");
            ApiAuthError::Internal(format!("Token generation error: {e}"))
        })
    }

    /// Establish the initial session at signup.
    ///
    /// The user row (including its API key) was just written by
    /// registration; this mints a short first access token (15 minutes),
    /// a refresh token (30 days) and persists the session record.
    pub async fn establish_session(&self, user_id: UserId) -> Result<IssuedTokens, ApiAuthError> {
        let now = Utc::now();
        let access_expires_at = now + Duration::minutes(SIGNUP_ACCESS_TOKEN_VALIDITY_MINUTES);
        let refresh_expires_at = now + Duration::days(REFRESH_TOKEN_VALIDITY_DAYS);

        let access_token = self.mint_access_token(user_id, access_expires_at)?;
        let refresh_token = self.mint_refresh_token(user_id, refresh_expires_at)?;

        let mut tx = self.pool.begin().await?;
        SessionRecord::upsert_in_tx(
            &mut tx,
            UpsertSession {
                user_id: *user_id.as_uuid(),
                access_token_expires_at: access_expires_at,
                refresh_token: refresh_token.clone(),
                refresh_token_expires_at: refresh_expires_at,
            },
        )
        .await?;
        tx.commit().await?;

        tracing::info!(user_id = %user_id, "Session established");

        Ok(IssuedTokens {
            access_token,
            access_expires_at,
            refresh_token,
            refresh_expires_at,
        })
    }

    /// Sign a verified user in.
    ///
    /// Mints a one-hour access token and a fresh 30-day refresh token,
    /// then rotates the API key and upserts the session record inside one
    /// transaction. A failure at any step rolls both writes back, so a
    /// half-applied signin is never visible.
    pub async fn signin(&self, user: &User) -> Result<IssuedTokens, ApiAuthError> {
        let user_id = user.user_id();
        let now = Utc::now();
        let access_expires_at = now + Duration::hours(ACCESS_TOKEN_VALIDITY_HOURS);
        let api_key_expires_at = now + Duration::days(SIGNIN_API_KEY_VALIDITY_DAYS);
        // The refresh window tracks the API key window.
        let refresh_expires_at = api_key_expires_at;

        let access_token = self.mint_access_token(user_id, access_expires_at)?;
        let refresh_token = self.mint_refresh_token(user_id, refresh_expires_at)?;

        let (_api_key, api_key_hash) =
            generate_and_hash_api_key(&self.hasher)?;

        let mut tx = self.pool.begin().await?;

        let updated =
            User::update_api_key_in_tx(&mut tx, user.id, &api_key_hash, api_key_expires_at)
                .await?;
        if updated == 0 {
            // The row vanished between credential verification and this
            // write; dropping the transaction rolls back.
            return Err(ApiAuthError::Internal(
                "User row disappeared during signin".to_string(),
            ));
        }

        SessionRecord::upsert_in_tx(
            &mut tx,
            UpsertSession {
                user_id: user.id,
                access_token_expires_at: access_expires_at,
                refresh_token: refresh_token.clone(),
                refresh_token_expires_at: refresh_expires_at,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(user_id = %user_id, "User signed in");

        Ok(IssuedTokens {
            access_token,
            access_expires_at,
            refresh_token,
            refresh_expires_at,
        })
    }

    /// Extend a session from its refresh token.
    ///
    /// The session record must already exist; refresh never re-issues a
    /// session from nothing. The refresh token value is kept and its
    /// window rolled 30 days forward; the API key is rotated with a
    /// three-month window inside the same transaction.
    pub async fn refresh(&self, refresh_token: &str) -> Result<IssuedTokens, ApiAuthError> {
        let session = SessionRecord::find_by_refresh_token(&self.pool, refresh_token)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Refresh attempt with unknown refresh token");
                ApiAuthError::Unauthenticated("Invalid refresh token".to_string())
            })?;

        if session.is_expired() {
            tracing::warn!(user_id = %session.user_id(), "Refresh attempt with expired session");
            return Err(ApiAuthError::Unauthenticated(
                "Refresh token has expired".to_string(),
            ));
        }

        let user_id = session.user_id();
        let now = Utc::now();
        let access_expires_at = now + Duration::hours(ACCESS_TOKEN_VALIDITY_HOURS);
        let refresh_expires_at = now + Duration::days(REFRESH_TOKEN_VALIDITY_DAYS);
        let api_key_expires_at = now + Duration::days(REFRESH_API_KEY_VALIDITY_DAYS);

        let access_token = self.mint_access_token(user_id, access_expires_at)?;

        let (_api_key, api_key_hash) =
            generate_and_hash_api_key(&self.hasher)?;

        let mut tx = self.pool.begin().await?;

        let updated = User::update_api_key_in_tx(
            &mut tx,
            session.user_id,
            &api_key_hash,
            api_key_expires_at,
        )
        .await?;
        if updated == 0 {
            return Err(ApiAuthError::Unauthenticated(
                "Session owner no longer exists".to_string(),
            ));
        }

        let touched = SessionRecord::touch_in_tx(
            &mut tx,
            session.user_id,
            access_expires_at,
            refresh_expires_at,
        )
        .await?;
        if touched == 0 {
            // Concurrently signed out; do not resurrect the session.
            return Err(ApiAuthError::Unauthenticated(
                "Session no longer exists".to_string(),
            ));
        }

        tx.commit().await?;

        tracing::info!(user_id = %user_id, "Session refreshed");

        Ok(IssuedTokens {
            access_token,
            access_expires_at,
            // Same token value, rolled window.
            refresh_token: refresh_token.to_string(),
            refresh_expires_at,
        })
    }

    /// Sign a user out everywhere.
    ///
    /// Overwrites the API key hash and the session's refresh token with
    /// expired sentinels dated one year in the past. Every subsequent
    /// per-request check re-reads the API-key expiry, so revocation takes
    /// effect immediately without a token blocklist.
    pub async fn signout(&self, user_id: UserId) -> Result<(), ApiAuthError> {
        let revoked_at = Utc::now() - Duration::days(REVOKED_VALIDITY_DAYS);
        let api_key_sentinel = revoked_api_key_sentinel()?;
        let refresh_sentinel = revoked_api_key_sentinel()?;

        let mut tx = self.pool.begin().await?;

        User::update_api_key_in_tx(&mut tx, *user_id.as_uuid(), &api_key_sentinel, revoked_at)
            .await?;

        SessionRecord::upsert_in_tx(
            &mut tx,
            UpsertSession {
                user_id: *user_id.as_uuid(),
                access_token_expires_at: revoked_at,
                refresh_token: refresh_sentinel,
                refresh_token_expires_at: revoked_at,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(user_id = %user_id, "User signed out");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_windows() {
        assert_eq!(SIGNUP_ACCESS_TOKEN_VALIDITY_MINUTES, 15);
        assert_eq!(ACCESS_TOKEN_VALIDITY_HOURS, 1);
        assert_eq!(REFRESH_TOKEN_VALIDITY_DAYS, 30);
        assert_eq!(REFRESH_API_KEY_VALIDITY_DAYS, 90);
    }

    #[test]
    fn settings_hold_distinct_secrets() {
        let settings = AuthSettings::new(
            b"access".to_vec(),
            b"refresh".to_vec(),
            TokenConfig::new("booking-api", "booking-frontend"),
        );

        assert_ne!(settings.access_secret, settings.refresh_secret);
        assert_eq!(settings.token_config.issuer, "booking-api");
    }

    // Transactional paths run against Postgres and are covered by the
    // integration tests in tests/auth_flow_test.rs.
}
