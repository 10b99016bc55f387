//! Signout endpoint handler.
//!
//! POST /auth/signout - Revoke the session and clear both cookies.

use crate::cookies::clear_session_cookies;
use crate::error::ApiAuthError;
use crate::models::MessageResponse;
use crate::services::TokenService;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;
use stayline_db::User;

/// Handle user signout.
///
/// Requires an authenticated request (the cookie middleware inserts the
/// [`User`]). The API key and refresh token are overwritten with expired
/// sentinels, so every bearer credential dies at once; the response
/// clears both cookies.
#[utoipa::path(
    post,
    path = "/auth/signout",
    responses(
        (status = 200, description = "Signed out successfully", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal error"),
    ),
    tag = "Authentication"
)]
pub async fn signout_handler(
    Extension(token_service): Extension<Arc<TokenService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, HeaderMap, Json<MessageResponse>), ApiAuthError> {
    token_service.signout(user.user_id()).await?;

    let mut headers = HeaderMap::new();
    clear_session_cookies(&mut headers);

    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse::new("Signed out successfully")),
    ))
}

#[cfg(test)]
mod tests {
    // Handler tests require a database and live in tests/auth_flow_test.rs.
}
