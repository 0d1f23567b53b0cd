//! # Services Layer
//!
//! Business logic services that sit between the HTTP handlers and the store:
//!
//! ```text
//! Handlers (HTTP) → Services (Business Logic) → Repository / Token Issuer
//! ```
//!
//! Services are structs holding their dependencies (`DbPool`, `TokenIssuer`),
//! constructed once in [`crate::server`] and shared through [`crate::AppState`].
//! They return `Result<T, AppError>`; the handlers decide how an error is
//! rendered.

pub mod auth;

pub use auth::AuthService;
