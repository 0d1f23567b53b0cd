//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used across
//! the validator, the store and the auth service. It follows the `thiserror`
//! pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** - caller input or credentials
//!    - [`Validation`](AppError::Validation) → 400 Bad Request
//!    - [`Conflict`](AppError::Conflict) → 409 Conflict
//!    - [`Auth`](AppError::Auth) → 401 Unauthorized
//!
//! 2. **Server Errors** - persistence or startup failures
//!    - [`Store`](AppError::Store) → 500 Internal Server Error
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! ## Status Modes
//!
//! The HTTP status is chosen by [`ErrorStatusMode`]. `Typed` uses the table
//! above and hides server-side details behind a generic message. `Uniform`
//! answers every error with 400 and its own message, which is what existing
//! clients of the service were built against.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.chars().count() < 4 {
//!         return Err(AppError::Validation(
//!             "Your name must be at least 4 characters long".to_string()
//!         ));
//!     }
//!     Ok(name)
//! }
//! ```

use std::str::FromStr;

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Generic message exposed for server-side failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-constraint input, including a password
    /// confirmation mismatch.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Registration with an email that is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unknown email or wrong password. Both cases carry the same message.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Persistence-layer failure (connectivity, constraint, query).
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected failure (hashing, token signing, task join).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// How errors are mapped onto HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStatusMode {
    /// 400 / 409 / 401 / 500 by error kind.
    #[default]
    Typed,
    /// Every error is answered with 400.
    Uniform,
}

impl FromStr for ErrorStatusMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "typed" => Ok(Self::Typed),
            "uniform" => Ok(Self::Uniform),
            other => Err(AppError::Config(format!(
                "ERROR_STATUS_MODE must be 'typed' or 'uniform', got '{other}'"
            ))),
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error under `mode`.
    pub fn status_code(&self, mode: ErrorStatusMode) -> StatusCode {
        if mode == ErrorStatusMode::Uniform {
            return StatusCode::BAD_REQUEST;
        }

        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Store(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message exposed to the caller under `mode`.
    ///
    /// In `Typed` mode server-side failures return a generic message so store
    /// details never reach the client. `Uniform` mode answers with the error's
    /// own message for every kind.
    pub fn user_message(&self, mode: ErrorStatusMode) -> String {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::Auth(msg) => msg.clone(),
            AppError::Store(msg) | AppError::Config(msg) | AppError::Internal(msg) => match mode {
                ErrorStatusMode::Typed => INTERNAL_ERROR_MESSAGE.to_string(),
                ErrorStatusMode::Uniform => msg.clone(),
            },
        }
    }

    /// Whether the error was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Conflict(_) | AppError::Auth(_)
        )
    }

    /// Render the error as `{ "error": <message> }` with the status picked by `mode`.
    pub fn into_response_with(self, mode: ErrorStatusMode) -> Response {
        let status = self.status_code(mode);

        if self.is_client_error() {
            tracing::debug!("Client error: {}", self);
        } else {
            tracing::error!("Server error: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.user_message(mode),
        });

        (status, body).into_response()
    }
}

/// Implement Axum's `IntoResponse` using the typed status mapping.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with(ErrorStatusMode::Typed)
    }
}

/// Convert `sqlx::Error` to `AppError`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                AppError::Store(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Store(format!("Database error: {}", err)),
        }
    }
}

/// Convert `sqlx::migrate::MigrateError` to `AppError`.
impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Store(format!("Migration error: {}", err))
    }
}

/// Hashing and token failures are server-side.
impl From<lib_auth::Error> for AppError {
    fn from(err: lib_auth::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Environment lookups only fail during startup.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
