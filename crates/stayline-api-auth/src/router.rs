//! Authentication API router configuration.
//!
//! Routes:
//! - POST /signup
//! - POST /signin
//! - POST /refresh
//! - GET  /check
//! - POST /signout (cookie-authenticated)
//!
//! The caller nests this router under its auth prefix and supplies
//! [`AuthState`]; every handler and the middleware resolve their
//! collaborators from the `Extension` layers installed here.

use crate::handlers::{
    check_handler, refresh_handler, signin_handler, signout_handler, signup_handler,
};
use crate::middleware::cookie_auth_middleware;
use crate::services::{AuthService, AuthSettings, TokenService};
use axum::routing::{get, post};
use axum::{middleware, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared state for the authentication routes.
#[derive(Clone)]
pub struct AuthState {
    pub pool: PgPool,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub settings: Arc<AuthSettings>,
}

impl AuthState {
    /// Build the state from a pool and settings.
    #[must_use]
    pub fn new(pool: PgPool, settings: AuthSettings) -> Self {
        let auth_service = Arc::new(AuthService::new(pool.clone()));
        let token_service = Arc::new(TokenService::new(settings.clone(), pool.clone()));

        Self {
            pool,
            auth_service,
            token_service,
            settings: Arc::new(settings),
        }
    }
}

/// Create the authentication router.
pub fn auth_router(state: AuthState) -> Router {
    let protected_routes = Router::new()
        .route("/signout", post(signout_handler))
        .layer(middleware::from_fn(cookie_auth_middleware));

    Router::new()
        .route("/signup", post(signup_handler))
        .route("/signin", post(signin_handler))
        .route("/refresh", post(refresh_handler))
        .route("/check", get(check_handler))
        .merge(protected_routes)
        .layer(Extension(state.pool))
        .layer(Extension(state.auth_service))
        .layer(Extension(state.token_service))
        .layer(Extension(state.settings))
}

#[cfg(test)]
mod tests {
    // Route wiring is exercised end to end by tests/auth_flow_test.rs.
}
