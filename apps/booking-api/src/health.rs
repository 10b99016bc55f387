//! Health check endpoint.

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use sqlx::PgPool;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Report service health, including database reachability.
pub async fn health_check(
    Extension(pool): Extension<PgPool>,
) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (StatusCode::OK, Json(HealthResponse { status: "healthy" })),
        Err(e) => {
            tracing::error!("Health check database probe failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                }),
            )
        }
    }
}
