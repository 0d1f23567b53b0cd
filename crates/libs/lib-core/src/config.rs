//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The configuration is built once in `main` and passed explicitly to the
//! server; nothing reads it through a global.
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::from_env()?;
//! config.validate()?;
//! println!("listening on {}", config.bind_address());
//! # Ok::<(), lib_core::AppError>(())
//! ```

use axum::http::HeaderValue;
use lib_utils::{get_env, get_env_or, get_env_parse_or};

use crate::error::{AppError, ErrorStatusMode, Result};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3333;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Interface to bind (`HOST`)
    pub host: String,

    /// HTTP port (`PORT`)
    pub port: u16,

    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// JWT token validity period in hours
    ///
    /// Valid range: 1-720 hours (1 hour to 30 days)
    pub jwt_expiration_hours: i64,

    /// Status code policy for error responses
    pub error_status_mode: ErrorStatusMode,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let host = get_env_or("HOST", "0.0.0.0");
        let port = get_env_parse_or("PORT", DEFAULT_PORT)?;

        // Default to data/users.db so the database file stays out of the repo root
        let database_url = get_env_or("DATABASE_URL", "sqlite:data/users.db");

        let jwt_secret = get_env("JWT_SECRET")?;
        let jwt_expiration_hours = get_env_parse_or("JWT_EXPIRATION_HOURS", 24)?;

        let error_status_mode = get_env_or("ERROR_STATUS_MODE", "typed").parse()?;

        let cors_allowed_origins = parse_origins(&get_env_or("CORS_ALLOWED_ORIGINS", ""));

        Ok(Self {
            host,
            port,
            database_url,
            jwt_secret,
            jwt_expiration_hours,
            error_status_mode,
            cors_allowed_origins,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.len() < 32 {
            return Err(AppError::Config(
                "JWT_SECRET must be at least 32 characters long".to_string(),
            ));
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err(AppError::Config(
                "JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string(),
            ));
        }

        if let Some(origin) = self
            .cors_allowed_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(AppError::Config(format!(
                "CORS_ALLOWED_ORIGINS contains an invalid origin: {origin:?}"
            )));
        }

        Ok(())
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
