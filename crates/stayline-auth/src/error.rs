//! Error types for credential and token operations.

use thiserror::Error;

/// Authentication primitive errors.
///
/// Each variant maps to a specific failure mode in hashing, key
/// generation or token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Token errors
    /// Token signature does not verify against the supplied secret.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token issuer does not match the configured service name.
    #[error("Invalid issuer: expected '{expected}'")]
    InvalidIssuer {
        /// The configured issuer the token was checked against.
        expected: String,
    },

    /// Token audience does not contain the configured frontend name.
    #[error("Invalid audience: expected '{expected}'")]
    InvalidAudience {
        /// The configured audience the token was checked against.
        expected: String,
    },

    /// Token has expired (exp claim is in the past).
    #[error("Token has expired")]
    TokenExpired,

    /// Token is not yet valid (nbf claim is in the future).
    #[error("Token not valid yet")]
    TokenNotYetValid,

    /// Token is malformed or otherwise undecodable.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // Credential errors
    /// Hashing operation failed.
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    /// Stored digest is not a valid PHC string.
    #[error("Invalid credential hash format")]
    InvalidHashFormat,

    /// The system random source failed to produce bytes.
    #[error("Random source failure: {0}")]
    RandomSourceFailed(String),
}

impl AuthError {
    /// Check if this error indicates an expired token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }

    /// Check if this error is any of the token validation failures.
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidSignature
                | AuthError::InvalidIssuer { .. }
                | AuthError::InvalidAudience { .. }
                | AuthError::TokenExpired
                | AuthError::TokenNotYetValid
                | AuthError::InvalidToken(_)
        )
    }

    /// Check if this error is related to credential hashing.
    #[must_use]
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            AuthError::HashingFailed(_)
                | AuthError::InvalidHashFormat
                | AuthError::RandomSourceFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(AuthError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            AuthError::InvalidSignature.to_string(),
            "Invalid token signature"
        );
        assert_eq!(
            AuthError::InvalidIssuer {
                expected: "booking-api".into()
            }
            .to_string(),
            "Invalid issuer: expected 'booking-api'"
        );
    }

    #[test]
    fn classification_helpers() {
        assert!(AuthError::TokenExpired.is_expired());
        assert!(AuthError::TokenNotYetValid.is_token_error());
        assert!(!AuthError::TokenNotYetValid.is_credential_error());
        assert!(AuthError::InvalidHashFormat.is_credential_error());
        assert!(!AuthError::InvalidHashFormat.is_token_error());
    }
}
