//! Authentication lifecycle for stayline.
//!
//! Implements signup, signin, refresh, signout and the per-request
//! authentication check over cookie-carried tokens. Session state lives
//! entirely in the database; the API-key expiry stored on the user row is
//! the revocation authority that every request re-reads.

pub mod cookies;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiAuthError;
pub use middleware::cookie_auth_middleware;
pub use router::{auth_router, AuthState};
pub use services::{AuthService, AuthSettings, SessionState, TokenService};
