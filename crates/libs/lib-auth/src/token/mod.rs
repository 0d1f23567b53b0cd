//! # JWT Token Management
//!
//! Issues HS256 tokens asserting a user id, and decodes them back.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::now_utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// JWT Claims structure containing user authentication information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Encode a JWT token bound to `user_id`.
pub fn encode_jwt(user_id: &str, secret: &str, expiration_hours: i64) -> Result<String> {
    let now = now_utc();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::TokenEncode(e.to_string()))
}

/// Decode and validate a JWT token (signature and expiry).
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| Error::TokenDecode(e.to_string()))?;

    Ok(token_data.claims)
}

/// Token issuer holding the signing secret and token lifetime.
///
/// Built once at startup and shared by the auth service.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    expiration_hours: i64,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// Issue a signed token for `user_id`.
    pub fn issue(&self, user_id: &str) -> Result<String> {
        encode_jwt(user_id, &self.secret, self.expiration_hours)
    }

    /// Decode a token previously issued with this secret.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode_jwt(token, &self.secret)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"***")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
