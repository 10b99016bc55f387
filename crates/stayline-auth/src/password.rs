//! Credential hashing with Argon2id.
//!
//! One hasher serves both passwords and API keys. Digests are
//! PHC-formatted strings carrying their own salt and cost parameters.

use crate::error::AuthError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Slow, salted, cost-parameterized one-way hasher.
///
/// Uses OWASP-recommended Argon2id parameters:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher {
    /// Create a hasher with the OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. These constants are always valid;
        // a failure here is a bug in the argon2 crate, not a runtime
        // condition.
        let params = Params::new(19456, 2, 1, None)
            .expect("OWASP Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a hasher with custom cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Hash a secret with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails. This only
    /// happens on entropy or internal library failure and is fatal for
    /// the request.
    pub fn hash(&self, secret: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let digest = argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(digest.to_string())
    }

    /// Verify a secret against a stored digest.
    ///
    /// Mismatch is not an error: returns `Ok(false)`. The comparison is
    /// constant-time at the library level.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if the stored digest is not
    /// a parseable PHC string.
    pub fn verify(&self, secret: &str, digest: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(digest).map_err(|_| AuthError::InvalidHashFormat)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        match argon2.verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            // Any verification failure is treated as non-match; verify
            // fails closed rather than erroring.
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> CredentialHasher {
        // Smaller cost for test speed.
        CredentialHasher::with_params(4096, 1, 1).unwrap()
    }

    #[test]
    fn hash_produces_argon2id_phc() {
        let digest = fast_hasher().hash("test-password").unwrap();
        assert!(digest.starts_with("$argon2id$"));
    }

    #[test]
    fn verify_round_trip() {
        let hasher = fast_hasher();
        let digest = hasher.hash("correct-password").unwrap();

        assert!(hasher.verify("correct-password", &digest).unwrap());
        assert!(!hasher.verify("wrong-password", &digest).unwrap());
    }

    #[test]
    fn verify_rejects_invalid_digest_format() {
        let result = fast_hasher().verify("password", "not-a-valid-digest");

        assert!(matches!(result.unwrap_err(), AuthError::InvalidHashFormat));
    }

    #[test]
    fn salts_are_unique_per_call() {
        let hasher = fast_hasher();
        let digest1 = hasher.hash("same-password").unwrap();
        let digest2 = hasher.hash("same-password").unwrap();

        assert_ne!(digest1, digest2);
        assert!(hasher.verify("same-password", &digest1).unwrap());
        assert!(hasher.verify("same-password", &digest2).unwrap());
    }

    #[test]
    fn digest_never_equals_plaintext() {
        let secret = "password123";
        let digest = fast_hasher().hash(secret).unwrap();
        assert_ne!(digest, secret);
    }

    #[test]
    fn minimum_length_passwords_round_trip() {
        let hasher = fast_hasher();
        for p in ["password", "pässwörd", "12345678longer"] {
            let digest = hasher.hash(p).unwrap();
            assert!(hasher.verify(p, &digest).unwrap());
        }
    }

    #[test]
    fn default_params_appear_in_digest() {
        let digest = CredentialHasher::new().hash("test").unwrap();
        assert!(digest.contains("m=19456"));
        assert!(digest.contains("t=2"));
        assert!(digest.contains("p=1"));
    }
}
