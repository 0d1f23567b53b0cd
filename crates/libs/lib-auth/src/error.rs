//! # Auth Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the hashing and token primitives.
///
/// A wrong password is not an error: [`crate::verify_password`] returns
/// `Ok(false)` for it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Failed to verify password: {0}")]
    Verify(String),

    #[error("Failed to encode JWT: {0}")]
    TokenEncode(String),

    #[error("Failed to decode JWT: {0}")]
    TokenDecode(String),
}
