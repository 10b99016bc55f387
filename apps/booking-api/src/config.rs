//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading: required variables must be present or startup
//! aborts with a clear error. Nothing below this module reads the
//! environment; secrets and token identity are injected from here.

use std::env;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable has an invalid value.
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        reason: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,

    /// Secret keying the access-token MAC.
    pub jwt_secret: String,

    /// Secret keying the refresh-token MAC.
    pub refresh_secret: String,

    /// Service name stamped into the `iss` claim.
    pub api_service_name: String,

    /// Frontend name stamped into the `aud` claim.
    pub frontend_app_name: String,

    /// Bind address.
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Allowed CORS origin for the frontend, if any.
    pub cors_origin: Option<String>,

    /// Default log filter directive.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is absent or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                name: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            refresh_secret: required_var("REFRESH_SECRET")?,
            api_service_name: required_var("API_SERVICE_NAME")?,
            frontend_app_name: required_var("FRONTEND_APP_NAME")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            cors_origin: env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty()),
            log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_error_names_the_variable() {
        let err = ConfigError::MissingVar("JWT_SECRET");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: JWT_SECRET"
        );
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            database_url: "postgres://localhost/stayline".into(),
            jwt_secret: "access".into(),
            refresh_secret: "refresh".into(),
            api_service_name: "booking-api".into(),
            frontend_app_name: "booking-frontend".into(),
            host: "127.0.0.1".into(),
            port: 9000,
            cors_origin: None,
            log_filter: "info".into(),
        };

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
