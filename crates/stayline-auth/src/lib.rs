//! Credential hashing and token codec for stayline.
//!
//! This crate provides:
//! - Argon2id hashing for passwords and API keys
//! - Cryptographically random API key generation
//! - HS256 encoding and decoding of time-bounded identity tokens
//!
//! # Example
//!
//! ```rust,ignore
//! use stayline_auth::{encode_token, decode_token, Claims, CredentialHasher, TokenConfig};
//! use chrono::{Duration, Utc};
//! use stayline_core::UserId;
//!
//! let config = TokenConfig::new("booking-api", "booking-frontend");
//!
//! let claims = Claims::new(UserId::new(), &config, Utc::now() + Duration::minutes(15));
//! let token = encode_token(&claims, b"access-secret")?;
//! let decoded = decode_token(&token, b"access-secret", &config)?;
//!
//! let hasher = CredentialHasher::new();
//! let digest = hasher.hash("my-secure-password")?;
//! let ok = hasher.verify("my-secure-password", &digest)?;
//! ```

mod apikey;
mod claims;
mod error;
mod password;
mod token;

pub use apikey::{
    generate_and_hash_api_key, generate_api_key, revoked_api_key_sentinel, API_KEY_BYTES,
};
pub use claims::Claims;
pub use error::AuthError;
pub use password::CredentialHasher;
pub use token::{decode_token, encode_token, TokenConfig};
