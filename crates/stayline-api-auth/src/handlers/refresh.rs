//! Token refresh endpoint handler.
//!
//! POST /auth/refresh - Extend a session from its refresh-token cookie.

use crate::cookies::{extract_cookie, set_session_cookies, REFRESH_TOKEN_COOKIE};
use crate::error::ApiAuthError;
use crate::models::MessageResponse;
use crate::services::TokenService;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle token refresh.
///
/// Looks the session up by the refresh-token cookie value; a missing
/// record is unauthenticated, never an implicit re-issuance. On success
/// a new one-hour access token is minted, the API key rotated with a
/// three-month window, and the refresh window rolled 30 days forward
/// while keeping the same token value.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    responses(
        (status = 200, description = "Session refreshed", body = MessageResponse),
        (status = 401, description = "Missing, unknown or expired refresh token"),
        (status = 500, description = "Internal error"),
    ),
    tag = "Authentication"
)]
pub async fn refresh_handler(
    Extension(token_service): Extension<Arc<TokenService>>,
    headers: HeaderMap,
) -> Result<(StatusCode, HeaderMap, Json<MessageResponse>), ApiAuthError> {
    let refresh_token = extract_cookie(&headers, REFRESH_TOKEN_COOKIE).ok_or_else(|| {
        ApiAuthError::Unauthenticated("Missing refresh token".to_string())
    })?;

    let tokens = token_service.refresh(&refresh_token).await?;

    let mut response_headers = HeaderMap::new();
    set_session_cookies(
        &mut response_headers,
        &tokens.access_token,
        tokens.access_expires_at,
        &tokens.refresh_token,
        tokens.refresh_expires_at,
    );

    Ok((
        StatusCode::OK,
        response_headers,
        Json(MessageResponse::new("Session refreshed successfully")),
    ))
}

#[cfg(test)]
mod tests {
    // Handler tests require a database and live in tests/auth_flow_test.rs.
}
