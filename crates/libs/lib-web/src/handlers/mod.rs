//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature domain. Handlers parse and validate the
//! request, then delegate to services in [`crate::services`].
//!
//! - **[`auth`]**: user registration and login
//!   - `POST /users/register` - create a user account
//!   - `POST /users/login` - authenticate with email/password
//!
//! ## Error Handling
//!
//! Handlers return `Result<(StatusCode, Json<T>), Response>`; the error side is
//! an `AppError` rendered with the configured `ErrorStatusMode`:
//!
//! ```text
//! { "error": "Email ou senha inválidos" }
//! ```

pub mod auth;
