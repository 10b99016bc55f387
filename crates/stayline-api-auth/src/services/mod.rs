//! Business logic for the authentication lifecycle.

pub mod auth_service;
pub mod lifecycle;
pub mod token_service;
pub mod validation;

pub use auth_service::{AuthService, RegisterInput};
pub use lifecycle::SessionState;
pub use token_service::{AuthSettings, IssuedTokens, TokenService};
