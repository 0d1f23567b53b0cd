//! # Authentication Handlers
//!
//! HTTP request handlers for the `/users` endpoints.
//!
//! ## Overview
//!
//! Each handler parses the JSON body, runs the schema validation, delegates to
//! [`AuthService`] and returns the service result with a fixed status:
//! - `POST /users/register` → 201 [`RegisterResponse`]
//! - `POST /users/login` → 200 [`LoginResponse`]
//!
//! Every failure, including a body that is not valid JSON, is rendered as
//! `{ "error": <message> }` with the status chosen by the configured
//! [`ErrorStatusMode`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::post};
//! use lib_web::handlers::auth::{register, login};
//!
//! let app = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! ```

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::Response,
};
use lib_core::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use lib_core::{AppError, ErrorStatusMode, Result};
use tracing::{info, instrument, warn};

use crate::services::AuthService;

/// Register handler - creates a new user account.
///
/// # Returns
///
/// * `Ok((StatusCode::CREATED, RegisterResponse))` - user stored
/// * `Err(Response)` - validation error, duplicate email or store failure
#[instrument(skip_all)]
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    State(mode): State<ErrorStatusMode>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> std::result::Result<(StatusCode, Json<RegisterResponse>), Response> {
    info!("[REGISTER] New registration request");

    match handle_register(&auth, payload).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(response))),
        Err(e) => {
            warn!("[REGISTER] Rejected: {}", e);
            Err(e.into_response_with(mode))
        }
    }
}

/// Login handler - authenticates an existing user.
///
/// # Returns
///
/// * `Ok((StatusCode::OK, LoginResponse))` - token and public user fields
/// * `Err(Response)` - validation error, invalid credentials or store failure
#[instrument(skip_all)]
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    State(mode): State<ErrorStatusMode>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> std::result::Result<(StatusCode, Json<LoginResponse>), Response> {
    info!("[LOGIN] Login attempt");

    match handle_login(&auth, payload).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(e) => {
            warn!("[LOGIN] Rejected: {}", e);
            Err(e.into_response_with(mode))
        }
    }
}

async fn handle_register(
    auth: &AuthService,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<RegisterResponse> {
    let Json(req) = payload.map_err(rejection_to_error)?;
    let input = req.validate()?;
    auth.register(input).await
}

async fn handle_login(
    auth: &AuthService,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<LoginResponse> {
    let Json(req) = payload.map_err(rejection_to_error)?;
    let input = req.validate()?;
    auth.login(input).await
}

/// Malformed bodies, missing fields and wrong content types are validation errors.
fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

#[cfg(test)]
mod tests;
