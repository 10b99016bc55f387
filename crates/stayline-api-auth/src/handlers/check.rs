//! Authentication status endpoint handler.
//!
//! GET /auth/check - Report whether the access-token cookie decodes.

use crate::cookies::{extract_cookie, ACCESS_TOKEN_COOKIE};
use crate::models::CheckResponse;
use crate::services::AuthSettings;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;
use stayline_auth::decode_token;

/// Report authentication status.
///
/// Purely a codec check on the access-token cookie; it never errors and
/// does not consult the store, so a revoked-but-unexpired token still
/// reads as authenticated here. Protected operations go through the
/// cookie middleware, which does re-read the API-key expiry.
#[utoipa::path(
    get,
    path = "/auth/check",
    responses(
        (status = 200, description = "Access token is valid", body = CheckResponse),
        (status = 401, description = "Missing or invalid access token", body = CheckResponse),
    ),
    tag = "Authentication"
)]
pub async fn check_handler(
    Extension(settings): Extension<Arc<AuthSettings>>,
    headers: HeaderMap,
) -> (StatusCode, Json<CheckResponse>) {
    let authenticated = extract_cookie(&headers, ACCESS_TOKEN_COOKIE)
        .map(|token| decode_token(&token, &settings.access_secret, &settings.token_config).is_ok())
        .unwrap_or(false);

    let status = if authenticated {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (
        status,
        Json(CheckResponse {
            is_authenticated: authenticated,
        }),
    )
}
