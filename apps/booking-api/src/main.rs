//! stayline booking API entry point.
//!
//! Startup order: configuration (fail-fast), logging, database pool,
//! migrations, router assembly, serve with graceful shutdown.

mod config;
mod health;
mod logging;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Extension, Router};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use stayline_api_auth::{auth_router, AuthSettings, AuthState};
use stayline_api_bookings::{bookings_router, BookingsState};
use stayline_auth::TokenConfig;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.log_filter);

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = stayline_db::run_migrations(&pool).await {
        tracing::error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let settings = AuthSettings::new(
        config.jwt_secret.as_bytes().to_vec(),
        config.refresh_secret.as_bytes().to_vec(),
        TokenConfig::new(&config.api_service_name, &config.frontend_app_name),
    );

    let auth_state = AuthState::new(pool.clone(), settings);
    let bookings_state = BookingsState {
        pool: pool.clone(),
        settings: auth_state.settings.clone(),
    };

    let mut app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/auth", auth_router(auth_state))
        .nest("/api", bookings_router(bookings_state))
        .layer(Extension(pool));

    if let Some(origin) = &config.cors_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                let cors = CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_headers([CONTENT_TYPE])
                    .allow_credentials(true);
                app = app.layer(cors);
            }
            Err(e) => {
                tracing::error!("Invalid CORS_ORIGIN value: {e}");
                std::process::exit(1);
            }
        }
    }

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(%addr, "booking-api listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
