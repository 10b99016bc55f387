//! Request DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Signup request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// User's first name.
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    /// User's last name.
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    /// User email address.
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 255, message = "Email too long"))]
    pub email: String,

    /// Login username.
    #[validate(length(min = 3, max = 30, message = "Username must be 3-30 characters"))]
    pub username: String,

    /// User password.
    /// The upper bound prevents hashing extremely long inputs.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Signin request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    /// Login username.
    #[validate(length(min = 1, max = 30, message = "Username must be 1-30 characters"))]
    pub username: String,

    /// User password.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_validates() {
        let request = SignupRequest {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "alice@example.com".into(),
            username: "alice_01".into(),
            password: "password123".into(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let request = SignupRequest {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "alice@example.com".into(),
            username: "alice_01".into(),
            password: "short".into(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn bad_email_is_rejected() {
        let request = SignupRequest {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "not-an-email".into(),
            username: "alice_01".into(),
            password: "password123".into(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn signin_request_rejects_empty_fields() {
        let request = SigninRequest {
            username: String::new(),
            password: "password123".into(),
        };

        assert!(request.validate().is_err());
    }
}
