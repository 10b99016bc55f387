//! Input validation for authentication requests.

use crate::error::ApiAuthError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Username: alphanumeric runs separated by single `-`, `_` or `.`
/// characters. No leading, trailing or doubled separators.
///
/// The pattern is a constant, so the `expect` here can only signal a
/// programming error.
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+([-._]?[a-zA-Z0-9]+)*$")
        .expect("USERNAME_REGEX is a valid regex pattern")
});

/// Simplified email format check.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

/// Validate a username.
///
/// # Errors
///
/// Returns `ApiAuthError::Validation` if the username is outside 3-30
/// characters or does not match the allowed format.
pub fn validate_username(username: &str) -> Result<(), ApiAuthError> {
    if username.len() < MIN_USERNAME_LENGTH
        || username.len() > MAX_USERNAME_LENGTH
        || !USERNAME_REGEX.is_match(username)
    {
        return Err(ApiAuthError::Validation(
            "Invalid username format".to_string(),
        ));
    }

    Ok(())
}

/// Validate an email address format.
///
/// # Errors
///
/// Returns `ApiAuthError::Validation` on format mismatch.
pub fn validate_email(email: &str) -> Result<(), ApiAuthError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(ApiAuthError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

/// Validate a password.
///
/// # Errors
///
/// Returns `ApiAuthError::Validation` if shorter than 8 characters.
pub fn validate_password(password: &str) -> Result<(), ApiAuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiAuthError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_usernames() {
        for name in [
            "abc",
            "alice_01",
            "john.doe",
            "mary-jane",
            "a1b2c3",
            "AB9",
            "user.name-with_mixed9",
        ] {
            assert!(validate_username(name).is_ok(), "expected valid: {name}");
        }
    }

    #[test]
    fn rejects_invalid_usernames() {
        for name in [
            "ab",              // too short
            "_leading",        // leading separator
            "trailing.",       // trailing separator
            "double__sep",     // doubled separator
            "has space",       // whitespace
            "emoji🔑",         // non-ascii
            "",                // empty
            &"x".repeat(31),   // too long
        ] {
            assert!(validate_username(name).is_err(), "expected invalid: {name}");
        }
    }

    #[test]
    fn boundary_lengths() {
        assert!(validate_username(&"a".repeat(3)).is_ok());
        assert!(validate_username(&"a".repeat(30)).is_ok());
        assert!(validate_username(&"a".repeat(2)).is_err());
        assert!(validate_username(&"a".repeat(31)).is_err());
    }

    #[test]
    fn accepts_valid_emails() {
        for email in ["a@b.co", "alice.smith+tag@example.com", "x_1@sub.domain.org"] {
            assert!(validate_email(email).is_ok(), "expected valid: {email}");
        }
    }

    #[test]
    fn rejects_invalid_emails() {
        for email in ["", "no-at-sign", "a@b", "a@.com", "@example.com"] {
            assert!(validate_email(email).is_err(), "expected invalid: {email}");
        }
    }

    #[test]
    fn password_length_rule() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password("").is_err());
    }
}
