//! Token claims.
//!
//! The decoded, verified payload of an access or refresh token. Claims are
//! ephemeral: produced by the codec, consumed on the next request, never
//! persisted.

use crate::token::TokenConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stayline_core::{ParseIdError, UserId};

/// Identity assertion carried by a signed token.
///
/// Standard RFC 7519 claims only: the token class (access vs refresh) is
/// determined by which secret signed it, not by a claims field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject - the user ID.
    pub sub: String,

    /// Issuer - the configured service name.
    pub iss: String,

    /// Audience - a single-entry list naming the frontend.
    #[serde(default)]
    pub aud: Vec<String>,

    /// Issued at, as a Unix timestamp.
    pub iat: i64,

    /// Not valid before, as a Unix timestamp.
    pub nbf: i64,

    /// Expiration time, as a Unix timestamp.
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user with the configured issuer and audience.
    ///
    /// `iat` and `nbf` are set to now; `exp` is caller-supplied.
    #[must_use]
    pub fn new(user_id: UserId, config: &TokenConfig, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: user_id.to_string(),
            iss: config.issuer.clone(),
            aud: vec![config.audience.clone()],
            iat: now,
            nbf: now,
            exp: expires_at.timestamp(),
        }
    }

    /// Parse the subject as a typed user ID.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the subject is not a UUID.
    pub fn user_id(&self) -> Result<UserId, ParseIdError> {
        self.sub.parse()
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn config() -> TokenConfig {
        TokenConfig::new("booking-api", "booking-frontend")
    }

    #[test]
    fn new_claims_carry_configured_identity() {
        let user_id = UserId::new();
        let claims = Claims::new(user_id, &config(), Utc::now() + Duration::hours(1));

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, "booking-api");
        assert_eq!(claims.aud, vec!["booking-frontend".to_string()]);
        assert_eq!(claims.iat, claims.nbf);
        assert!(!claims.is_expired());
    }

    #[test]
    fn user_id_round_trips() {
        let user_id = UserId::new();
        let claims = Claims::new(user_id, &config(), Utc::now() + Duration::hours(1));

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn past_expiry_is_expired() {
        let claims = Claims::new(UserId::new(), &config(), Utc::now() - Duration::hours(1));
        assert!(claims.is_expired());
    }
}
