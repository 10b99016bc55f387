//! Request middleware.

pub mod auth;

pub use auth::cookie_auth_middleware;
