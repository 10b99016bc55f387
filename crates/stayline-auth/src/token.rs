//! Token encoding and decoding with HS256.
//!
//! Access and refresh tokens share one codec; the caller keys it with the
//! secret for the token class being handled. Decoding always verifies the
//! MAC first, then issuer, audience, expiry and not-before in that order,
//! so unsigned claims are never trusted for any check.

use crate::claims::Claims;
use crate::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};

/// Issuer and audience a token must carry.
///
/// Constructed once at startup from configuration and passed by reference
/// into every encode/decode call.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Service name written into and required of the `iss` claim.
    pub issuer: String,
    /// Frontend name written into and required of the `aud` claim.
    pub audience: String,
}

impl TokenConfig {
    /// Create a token config.
    #[must_use]
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }
}

/// Encode claims into a signed token string.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if encoding fails.
pub fn encode_token(claims: &Claims, secret: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret);
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &key)
        .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a token.
///
/// Validation order: signature, issuer, audience, expiry, not-before.
///
/// # Errors
///
/// - `AuthError::InvalidSignature` - MAC does not verify
/// - `AuthError::InvalidIssuer` - issuer mismatch
/// - `AuthError::InvalidAudience` - audience does not contain the frontend
/// - `AuthError::TokenExpired` - expiry is in the past
/// - `AuthError::TokenNotYetValid` - not-before is in the future
/// - `AuthError::InvalidToken` - malformed token
pub fn decode_token(token: &str, secret: &[u8], config: &TokenConfig) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret);

    // Signature verification only; the claim checks below run explicitly
    // so their order is fixed.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data: TokenData<Claims> = decode(token, &key, &validation).map_err(map_jwt_error)?;
    let claims = data.claims;

    if claims.iss != config.issuer {
        return Err(AuthError::InvalidIssuer {
            expected: config.issuer.clone(),
        });
    }

    if !claims.aud.iter().any(|a| a == &config.audience) {
        return Err(AuthError::InvalidAudience {
            expected: config.audience.clone(),
        });
    }

    let now = Utc::now().timestamp();

    if claims.exp < now {
        return Err(AuthError::TokenExpired);
    }

    if claims.nbf > now {
        return Err(AuthError::TokenNotYetValid);
    }

    Ok(claims)
}

/// Map jsonwebtoken errors to `AuthError`.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use stayline_core::UserId;

    const SECRET: &[u8] = b"test-access-secret";
    const OTHER_SECRET: &[u8] = b"a-different-secret";

    fn config() -> TokenConfig {
        TokenConfig::new("booking-api", "booking-frontend")
    }

    fn valid_claims(user_id: UserId) -> Claims {
        Claims::new(user_id, &config(), Utc::now() + Duration::hours(1))
    }

    #[test]
    fn encode_produces_three_part_token() {
        let token = encode_token(&valid_claims(UserId::new()), SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn round_trip_preserves_subject() {
        let user_id = UserId::new();
        let token = encode_token(&valid_claims(user_id), SECRET).unwrap();
        let decoded = decode_token(&token, SECRET, &config()).unwrap();

        assert_eq!(decoded.user_id().unwrap(), user_id);
        assert_eq!(decoded.iss, "booking-api");
    }

    #[test]
    fn wrong_secret_is_invalid_signature() {
        let token = encode_token(&valid_claims(UserId::new()), SECRET).unwrap();
        let result = decode_token(&token, OTHER_SECRET, &config());

        assert!(matches!(result.unwrap_err(), AuthError::InvalidSignature));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims::new(UserId::new(), &config(), Utc::now() - Duration::hours(1));
        let token = encode_token(&claims, SECRET).unwrap();
        let result = decode_token(&token, SECRET, &config());

        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn signature_is_checked_before_expiry() {
        // An expired token decoded with the wrong secret must fail on the
        // signature, not on the expiry.
        let claims = Claims::new(UserId::new(), &config(), Utc::now() - Duration::hours(1));
        let token = encode_token(&claims, SECRET).unwrap();
        let result = decode_token(&token, OTHER_SECRET, &config());

        assert!(matches!(result.unwrap_err(), AuthError::InvalidSignature));
    }

    #[test]
    fn issuer_mismatch_is_rejected() {
        let other = TokenConfig::new("another-service", "booking-frontend");
        let token = encode_token(&valid_claims(UserId::new()), SECRET).unwrap();
        let result = decode_token(&token, SECRET, &other);

        assert!(matches!(
            result.unwrap_err(),
            AuthError::InvalidIssuer { .. }
        ));
    }

    #[test]
    fn audience_mismatch_is_rejected() {
        let other = TokenConfig::new("booking-api", "another-frontend");
        let token = encode_token(&valid_claims(UserId::new()), SECRET).unwrap();
        let result = decode_token(&token, SECRET, &other);

        assert!(matches!(
            result.unwrap_err(),
            AuthError::InvalidAudience { .. }
        ));
    }

    #[test]
    fn issuer_is_checked_before_expiry() {
        let mut claims = valid_claims(UserId::new());
        claims.iss = "another-service".to_string();
        claims.exp = (Utc::now() - Duration::hours(1)).timestamp();
        let token = encode_token(&claims, SECRET).unwrap();
        let result = decode_token(&token, SECRET, &config());

        assert!(matches!(
            result.unwrap_err(),
            AuthError::InvalidIssuer { .. }
        ));
    }

    #[test]
    fn not_yet_valid_token_is_rejected() {
        let mut claims = valid_claims(UserId::new());
        claims.nbf = (Utc::now() + Duration::hours(1)).timestamp();
        let token = encode_token(&claims, SECRET).unwrap();
        let result = decode_token(&token, SECRET, &config());

        assert!(matches!(result.unwrap_err(), AuthError::TokenNotYetValid));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let result = decode_token("not.a.token", SECRET, &config());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }
}
