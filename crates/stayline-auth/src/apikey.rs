//! API key generation.
//!
//! An API key is 32 bytes of OS randomness pushed through SHA-256 and
//! rendered as lowercase hex. The digest step only normalizes length and
//! format; the entropy comes entirely from the random bytes. The plaintext
//! key exists only at issuance; callers persist its Argon2id hash.

use crate::error::AuthError;
use crate::password::CredentialHasher;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes backing an API key (256 bits of entropy).
pub const API_KEY_BYTES: usize = 32;

/// Generate a new plaintext API key.
///
/// Returns 64 lowercase hex characters.
///
/// # Errors
///
/// Returns `AuthError::RandomSourceFailed` if the OS random source is
/// unavailable. This is fatal for the request and is not retried.
pub fn generate_api_key() -> Result<String, AuthError> {
    let mut bytes = [0u8; API_KEY_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::RandomSourceFailed(e.to_string()))?;

    let digest = Sha256::digest(bytes);
    Ok(hex::encode(digest))
}

/// Generate an API key and its Argon2id hash.
///
/// Returns `(plaintext, digest)`. Only the digest may be stored.
///
/// # Errors
///
/// Propagates random-source and hashing failures.
pub fn generate_and_hash_api_key(hasher: &CredentialHasher) -> Result<(String, String), AuthError> {
    let api_key = generate_api_key()?;
    let digest = hasher.hash(&api_key)?;
    Ok((api_key, digest))
}

/// Produce the sentinel value that replaces a revoked API key hash.
///
/// The `expired-` prefix makes revoked rows self-describing; the random
/// suffix keeps the column unique. The sentinel is not a valid PHC string
/// and can never verify against any key.
///
/// # Errors
///
/// Returns `AuthError::RandomSourceFailed` if the OS random source is
/// unavailable.
pub fn revoked_api_key_sentinel() -> Result<String, AuthError> {
    let mut bytes = [0u8; 14];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::RandomSourceFailed(e.to_string()))?;

    Ok(format!("expired-{}", hex::encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_64_lowercase_hex() {
        let key = generate_api_key().unwrap();
        assert_eq!(key.len(), 64);
        assert!(key
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn api_keys_are_unique() {
        let a = generate_api_key().unwrap();
        let b = generate_api_key().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_hash_never_equals_plaintext() {
        let hasher = CredentialHasher::with_params(4096, 1, 1).unwrap();
        let (key, digest) = generate_and_hash_api_key(&hasher).unwrap();

        assert_ne!(key, digest);
        assert!(hasher.verify(&key, &digest).unwrap());
        assert!(!hasher.verify("not-the-key", &digest).unwrap());
    }

    #[test]
    fn sentinel_shape() {
        let sentinel = revoked_api_key_sentinel().unwrap();
        assert!(sentinel.starts_with("expired-"));
        assert_eq!(sentinel.len(), "expired-".len() + 28);
        assert_ne!(sentinel, revoked_api_key_sentinel().unwrap());
    }

    #[test]
    fn sentinel_never_verifies() {
        let hasher = CredentialHasher::with_params(4096, 1, 1).unwrap();
        let sentinel = revoked_api_key_sentinel().unwrap();

        // The sentinel is not a PHC digest, so verification errors out
        // rather than matching anything.
        assert!(hasher.verify("any-key", &sentinel).is_err());
    }
}
