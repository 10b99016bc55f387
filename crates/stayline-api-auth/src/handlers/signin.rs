//! Signin endpoint handler.
//!
//! POST /auth/signin - Verify credentials and rotate the session.

use crate::cookies::set_session_cookies;
use crate::error::ApiAuthError;
use crate::handlers::validate_request;
use crate::models::{MessageResponse, SigninRequest};
use crate::services::{AuthService, SessionState, TokenService};
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle user signin.
///
/// Verifies the username/password pair (one generic error for both
/// failure modes), rejects accounts whose API-key window has already
/// elapsed, then rotates the API key and session record in one
/// transaction and sets fresh token cookies.
#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in successfully", body = MessageResponse),
        (status = 400, description = "Incorrect username or password"),
        (status = 401, description = "API key has expired"),
        (status = 500, description = "Internal error"),
    ),
    tag = "Authentication"
)]
pub async fn signin_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(token_service): Extension<Arc<TokenService>>,
    Json(request): Json<SigninRequest>,
) -> Result<(StatusCode, HeaderMap, Json<MessageResponse>), ApiAuthError> {
    validate_request(&request)?;

    let user = auth_service
        .verify_credentials(&request.username, &request.password)
        .await?;

    // Expired is terminal for this attempt: there is no self-service
    // rotation path, the user must re-register or recover out of band.
    if !SessionState::from_api_key(&user).is_authenticated() {
        tracing::warn!(user_id = %user.id, "Signin attempt with expired API key");
        return Err(ApiAuthError::Unauthenticated(
            "API key has expired".to_string(),
        ));
    }

    let tokens = token_service.signin(&user).await?;

    let mut headers = HeaderMap::new();
    set_session_cookies(
        &mut headers,
        &tokens.access_token,
        tokens.access_expires_at,
        &tokens.refresh_token,
        tokens.refresh_expires_at,
    );

    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse::new("Signed in successfully")),
    ))
}

#[cfg(test)]
mod tests {
    // Handler tests require a database and live in tests/auth_flow_test.rs.
}
