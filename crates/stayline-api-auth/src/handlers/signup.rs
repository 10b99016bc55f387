//! Signup endpoint handler.
//!
//! POST /auth/signup - Register a user and establish their first session.

use crate::cookies::set_session_cookies;
use crate::error::ApiAuthError;
use crate::handlers::validate_request;
use crate::models::{MessageResponse, SignupRequest};
use crate::services::auth_service::RegisterInput;
use crate::services::{AuthService, TokenService};
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle user signup.
///
/// Registers the account (hashing the password and issuing the initial
/// API key), then immediately establishes a session: a 15-minute access
/// token and a 30-day refresh token, both set as cookies.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 400, description = "Invalid input or duplicate identity"),
        (status = 500, description = "Internal error"),
    ),
    tag = "Authentication"
)]
pub async fn signup_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(token_service): Extension<Arc<TokenService>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, HeaderMap, Json<MessageResponse>), ApiAuthError> {
    validate_request(&request)?;

    let user = auth_service
        .register(RegisterInput {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            username: request.username,
            password: request.password,
        })
        .await?;

    let tokens = token_service.establish_session(user.user_id()).await?;

    let mut headers = HeaderMap::new();
    set_session_cookies(
        &mut headers,
        &tokens.access_token,
        tokens.access_expires_at,
        &tokens.refresh_token,
        tokens.refresh_expires_at,
    );

    Ok((
        StatusCode::CREATED,
        headers,
        Json(MessageResponse::new("User created successfully")),
    ))
}
