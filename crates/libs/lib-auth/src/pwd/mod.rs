//! # Password Hashing
//!
//! Password hashing and verification using bcrypt.

use crate::error::{Error, Result};

/// bcrypt work factor (2^8 rounds).
pub const HASH_COST: u32 = 8;

/// Hash a password with a freshly generated salt.
///
/// The returned string is a self-describing `$2b$08$...` hash; the salt and
/// cost travel with it so [`verify_password`] needs nothing else.
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, HASH_COST).map_err(|e| Error::Hash(e.to_string()))
}

/// Verify a plaintext password against a bcrypt hash.
///
/// Returns `Ok(false)` on mismatch. An unparsable hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).map_err(|e| Error::Verify(e.to_string()))
}
