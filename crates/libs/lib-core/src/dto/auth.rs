//! # Authentication Data Transfer Objects
//!
//! Defines request and response structures for the `/users` endpoints and the
//! schema validation that turns a raw request into a checked input.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /users/register` - [`RegisterRequest`] -> [`RegisterResponse`]
//! - `POST /users/login` - [`LoginRequest`] -> [`LoginResponse`]
//!
//! Every failure is answered with [`ErrorResponse`].
//!
//! ## Wire Format
//!
//! Field names are **camelCase** in JSON (`confirmPassword`).
//!
//! ## Validation
//!
//! [`RegisterRequest::validate`] and [`LoginRequest::validate`] check rules in
//! field order and stop at the first violation. The password confirmation
//! match is checked last, after every length and format rule has passed.
//!
//! | Rule | Message |
//! |---|---|
//! | `name` shorter than 4 chars | `Your name must be at least 4 characters long` |
//! | `email` not an email | `Invalid email address!` |
//! | `password` / `confirmPassword` shorter than 6 chars | `Your password must be at least 6 characters long` |
//! | `confirmPassword != password` | `Passwords do not match` |
//!
//! ## Registration Flow Example
//!
//! ```text
//! POST /users/register
//! Content-Type: application/json
//!
//! {
//!   "name": "Alice Doe",
//!   "email": "alice@example.com",
//!   "password": "secret1",
//!   "confirmPassword": "secret1"
//! }
//! ```
//!
//! Response (201):
//! ```text
//! { "message": "Usuário cadastrado com sucesso" }
//! ```
//!
//! ## Login Flow Example
//!
//! ```text
//! POST /users/login
//! Content-Type: application/json
//!
//! { "email": "alice@example.com", "password": "secret1" }
//! ```
//!
//! Response (200):
//! ```text
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "6f1c2a9e-3b1d-4c55-9e0f-2f4b8a7d1c3e",
//!     "name": "Alice Doe",
//!     "email": "alice@example.com"
//!   }
//! }
//! ```

use lib_utils::{validate_email, validate_equals, validate_min_chars};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const NAME_MIN_CHARS: usize = 4;
pub const PASSWORD_MIN_CHARS: usize = 6;

pub const NAME_TOO_SHORT: &str = "Your name must be at least 4 characters long";
pub const INVALID_EMAIL: &str = "Invalid email address!";
pub const PASSWORD_TOO_SHORT: &str = "Your password must be at least 6 characters long";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Registration request for `POST /users/register`.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Alice Doe",
///   "email": "alice@example.com",
///   "password": "secret1",
///   "confirmPassword": "secret1"
/// }
/// ```
///
/// # Security Note
///
/// Passwords arrive in plaintext and are hashed with bcrypt before storage.
/// Never log this struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Check the registration schema and return the validated input.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] carrying the message of the first violated rule.
    pub fn validate(self) -> Result<RegisterInput> {
        validate_min_chars(&self.name, NAME_MIN_CHARS, NAME_TOO_SHORT)
            .and_then(|_| validate_email(&self.email, INVALID_EMAIL))
            .and_then(|_| validate_min_chars(&self.password, PASSWORD_MIN_CHARS, PASSWORD_TOO_SHORT))
            .and_then(|_| {
                validate_min_chars(&self.confirm_password, PASSWORD_MIN_CHARS, PASSWORD_TOO_SHORT)
            })
            .and_then(|_| validate_equals(&self.confirm_password, &self.password, PASSWORDS_DO_NOT_MATCH))
            .map_err(AppError::Validation)?;

        Ok(RegisterInput {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

/// Validated registration input.
///
/// Only constructed by [`RegisterRequest::validate`], so holding one proves the
/// schema rules passed. The confirmation field is dropped once matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    name: String,
    email: String,
    password: String,
}

impl RegisterInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Login request for `POST /users/login`.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "alice@example.com",
///   "password": "secret1"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Check the login schema and return the validated input.
    pub fn validate(self) -> Result<LoginInput> {
        validate_email(&self.email, INVALID_EMAIL)
            .and_then(|_| validate_min_chars(&self.password, PASSWORD_MIN_CHARS, PASSWORD_TOO_SHORT))
            .map_err(AppError::Validation)?;

        Ok(LoginInput {
            email: self.email,
            password: self.password,
        })
    }
}

/// Validated login input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    email: String,
    password: String,
}

impl LoginInput {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Acknowledgement returned by a successful registration.
///
/// Carries no user data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub message: String,
}

/// Response returned by a successful login.
///
/// The `token` should be sent on subsequent requests as:
/// ```text
/// Authorization: Bearer <token>
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information (public, safe to send to client).
///
/// Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Standard error response for all API endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Email ou senha inválidos"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn validation_message(result: Result<impl std::fmt::Debug>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{
            "name": "Alice Doe",
            "email": "alice@example.com",
            "password": "secret1",
            "confirmPassword": "secret1"
        }"#;

        let request: RegisterRequest = serde_json::from_str(json)
            .expect("RegisterRequest deserialization should succeed");

        assert_eq!(request, register("Alice Doe", "alice@example.com", "secret1", "secret1"));
    }

    #[test]
    fn test_register_request_missing_confirmation() {
        let json = r#"{"name": "Alice Doe", "email": "alice@example.com", "password": "secret1"}"#;
        let result: std::result::Result<RegisterRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_register_valid() {
        let input = register("Alice Doe", "alice@example.com", "secret1", "secret1")
            .validate()
            .expect("valid registration should pass");

        assert_eq!(input.name(), "Alice Doe");
        assert_eq!(input.email(), "alice@example.com");
        assert_eq!(input.password(), "secret1");
    }

    #[test]
    fn test_register_name_too_short() {
        let result = register("Ali", "alice@example.com", "secret1", "secret1").validate();
        assert_eq!(validation_message(result), NAME_TOO_SHORT);
    }

    #[test]
    fn test_register_invalid_email() {
        for email in ["alice.example.com", "alice@localhost", "a@b", "a@[127.0.0.1]"] {
            let result = register("Alice Doe", email, "secret1", "secret1").validate();
            assert_eq!(validation_message(result), INVALID_EMAIL, "{email:?} should be rejected");
        }
    }

    #[test]
    fn test_register_password_too_short() {
        let result = register("Alice Doe", "alice@example.com", "12345", "12345").validate();
        assert_eq!(validation_message(result), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_register_confirmation_too_short() {
        let result = register("Alice Doe", "alice@example.com", "secret1", "sec").validate();
        assert_eq!(validation_message(result), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_register_passwords_do_not_match() {
        for (password, confirm) in [("secret1", "secret2"), ("secret1", "Secret1"), ("secret1", "secret1 ")] {
            let result = register("Alice Doe", "alice@example.com", password, confirm).validate();
            assert_eq!(validation_message(result), PASSWORDS_DO_NOT_MATCH);
        }
    }

    #[test]
    fn test_register_first_violation_wins() {
        // Every rule fails; the name rule is reported.
        let result = register("Al", "nope", "123", "4").validate();
        assert_eq!(validation_message(result), NAME_TOO_SHORT);

        // A bad email outranks a mismatch even when both lengths pass.
        let result = register("Alice Doe", "nope", "secret1", "secret2").validate();
        assert_eq!(validation_message(result), INVALID_EMAIL);

        // Mismatch is only reported once lengths pass.
        let result = register("Alice Doe", "alice@example.com", "secret1", "abc").validate();
        assert_eq!(validation_message(result), PASSWORD_TOO_SHORT);

        let result = register("Alice Doe", "alice@example.com", "secret1", "secret2").validate();
        assert_eq!(validation_message(result), PASSWORDS_DO_NOT_MATCH);
    }

    #[test]
    fn test_register_name_counts_characters() {
        assert!(register("Zoë", "zoe@example.com", "secret1", "secret1").validate().is_err());
        assert!(register("João", "joao@example.com", "secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn test_login_valid() {
        let input = LoginRequest {
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        }
        .validate()
        .expect("valid login should pass");

        assert_eq!(input.email(), "alice@example.com");
        assert_eq!(input.password(), "secret1");
    }

    #[test]
    fn test_login_invalid() {
        let result = LoginRequest {
            email: "alice".to_string(),
            password: "secret1".to_string(),
        }
        .validate();
        assert_eq!(validation_message(result), INVALID_EMAIL);

        let result = LoginRequest {
            email: "alice@localhost".to_string(),
            password: "secret1".to_string(),
        }
        .validate();
        assert_eq!(validation_message(result), INVALID_EMAIL);

        let result = LoginRequest {
            email: "alice@example.com".to_string(),
            password: "12345".to_string(),
        }
        .validate();
        assert_eq!(validation_message(result), PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            token: "token".to_string(),
            user: UserInfo {
                id: "id-1".to_string(),
                name: "Alice Doe".to_string(),
                email: "alice@example.com".to_string(),
            },
        };

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "token": "token",
                "user": { "id": "id-1", "name": "Alice Doe", "email": "alice@example.com" }
            })
        );
    }
}
