//! # Auth Service
//!
//! Business logic for registering users and authenticating them.
//!
//! ## Overview
//!
//! Both operations are linear procedures over the user store:
//!
//! ```text
//! register: find_by_email → hash (bcrypt) → new UUID → create → ack
//! login:    find_by_email → verify (bcrypt) → issue JWT → token + public user
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, AppError>`:
//! - `AppError::Conflict` - email already registered
//! - `AppError::Auth` - unknown email or wrong password (same message for both)
//! - `AppError::Store` - database failure
//! - `AppError::Internal` - hashing, token signing or a panicked blocking task
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_auth::TokenIssuer;
//! use lib_core::{create_pool, dto::RegisterRequest};
//! use lib_web::services::AuthService;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//! let service = AuthService::new(pool, TokenIssuer::new("x".repeat(32), 24));
//!
//! let input = RegisterRequest {
//!     name: "Alice Doe".to_string(),
//!     email: "alice@example.com".to_string(),
//!     password: "secret1".to_string(),
//!     confirm_password: "secret1".to_string(),
//! }
//! .validate()?;
//! service.register(input).await?;
//! # Ok(())
//! # }
//! ```

use lib_auth::{hash_password, verify_password, TokenIssuer};
use lib_core::dto::{LoginInput, LoginResponse, RegisterInput, RegisterResponse};
use lib_core::model::store::{UserForCreate, UserRepository};
use lib_core::{AppError, DbPool, Result};
use tokio::task;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub const EMAIL_ALREADY_REGISTERED: &str = "Email já cadastrado";
pub const INVALID_CREDENTIALS: &str = "Email ou senha inválidos";
pub const REGISTERED_SUCCESSFULLY: &str = "Usuário cadastrado com sucesso";

/// Registration and login over the user store.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AuthService {
    pool: DbPool,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(pool: DbPool, tokens: TokenIssuer) -> Self {
        Self { pool, tokens }
    }

    /// Register a new user.
    ///
    /// The existence check and the insert are not atomic. A concurrent
    /// registration that wins the race is reported as the same conflict via
    /// the unique index on `users.email`.
    #[instrument(skip_all, fields(email = %input.email()))]
    pub async fn register(&self, input: RegisterInput) -> Result<RegisterResponse> {
        if UserRepository::find_by_email(&self.pool, input.email()).await?.is_some() {
            warn!("[REGISTER] Email already registered");
            return Err(AppError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
        }

        debug!("[REGISTER] Hashing password...");
        let password_hash = hash_blocking(input.password().to_string()).await?;

        let user = UserForCreate::new(
            Uuid::new_v4().to_string(),
            input.name().to_string(),
            input.email().to_string(),
            password_hash,
        );

        debug!("[REGISTER] Creating user in database...");
        let user = match UserRepository::create(&self.pool, user).await {
            Ok(user) => user,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!("[REGISTER] Email registered concurrently");
                return Err(AppError::Conflict(EMAIL_ALREADY_REGISTERED.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        info!(user_id = %user.id, "[REGISTER] User created");

        Ok(RegisterResponse {
            message: REGISTERED_SUCCESSFULLY.to_string(),
        })
    }

    /// Authenticate a user and issue a token.
    ///
    /// Unknown email and wrong password fail with the same message so the
    /// response does not reveal whether an account exists.
    #[instrument(skip_all, fields(email = %input.email()))]
    pub async fn login(&self, input: LoginInput) -> Result<LoginResponse> {
        let Some(user) = UserRepository::find_by_email(&self.pool, input.email()).await? else {
            warn!("[LOGIN] User not found");
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        };

        debug!("[LOGIN] Verifying password...");
        let is_valid =
            verify_blocking(input.password().to_string(), user.password_hash.clone()).await?;

        if !is_valid {
            warn!(user_id = %user.id, "[LOGIN] Invalid password");
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(&user.id)?;

        info!(user_id = %user.id, "[LOGIN] User authenticated");

        Ok(LoginResponse {
            token,
            user: user.to_info(),
        })
    }
}

// bcrypt is CPU bound; keep it off the async workers.
async fn hash_blocking(password: String) -> Result<String> {
    let hash = task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {e}")))??;
    Ok(hash)
}

async fn verify_blocking(password: String, hash: String) -> Result<bool> {
    let is_valid = task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {e}")))??;
    Ok(is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::dto::{LoginRequest, RegisterRequest};
    use lib_core::{create_pool, migrate};

    const SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

    async fn service() -> (AuthService, DbPool) {
        let pool = create_pool("sqlite::memory:").await.expect("pool");
        migrate(&pool).await.expect("migrate");
        (AuthService::new(pool.clone(), TokenIssuer::new(SECRET, 24)), pool)
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterRequest {
            name: "Alice Doe".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
        .validate()
        .expect("valid registration")
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
        .validate()
        .expect("valid login")
    }

    #[tokio::test]
    async fn test_register_creates_one_hashed_user() {
        let (service, pool) = service().await;

        let response = service
            .register(register_input("alice@example.com", "secret1"))
            .await
            .expect("registration should succeed");
        assert_eq!(response.message, REGISTERED_SUCCESSFULLY);

        let user = UserRepository::find_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .expect("user should be stored");

        assert_eq!(user.name, "Alice Doe");
        assert_ne!(user.password_hash, "secret1");
        assert!(verify_password("secret1", &user.password_hash).unwrap());
        assert!(Uuid::parse_str(&user.id).is_ok());
        assert_eq!(UserRepository::count_by_email(&pool, "alice@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (service, pool) = service().await;

        service.register(register_input("alice@example.com", "secret1")).await.unwrap();
        let err = service
            .register(register_input("alice@example.com", "another1"))
            .await
            .expect_err("second registration should conflict");

        assert!(matches!(err, AppError::Conflict(ref msg) if msg == EMAIL_ALREADY_REGISTERED));
        assert_eq!(UserRepository::count_by_email(&pool, "alice@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_keep_email_unique() {
        let (service, pool) = service().await;

        let (first, second) = tokio::join!(
            service.register(register_input("race@example.com", "secret1")),
            service.register(register_input("race@example.com", "secret2")),
        );

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(AppError::Conflict(msg)) if msg == EMAIL_ALREADY_REGISTERED)));
        assert_eq!(UserRepository::count_by_email(&pool, "race@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_success() {
        let (service, pool) = service().await;
        service.register(register_input("alice@example.com", "secret1")).await.unwrap();

        let response = service
            .login(login_input("alice@example.com", "secret1"))
            .await
            .expect("login should succeed");

        let stored = UserRepository::find_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.user, stored.to_info());

        let claims = TokenIssuer::new(SECRET, 24).verify(&response.token).expect("token");
        assert_eq!(claims.sub, stored.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (service, _pool) = service().await;
        service.register(register_input("alice@example.com", "secret1")).await.unwrap();

        let unknown = service
            .login(login_input("bob@example.com", "secret1"))
            .await
            .expect_err("unknown email should fail");
        let wrong = service
            .login(login_input("alice@example.com", "wrong12"))
            .await
            .expect_err("wrong password should fail");

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, AppError::Auth(ref msg) if msg == INVALID_CREDENTIALS));
        assert!(matches!(wrong, AppError::Auth(ref msg) if msg == INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_login_only_with_registered_password() {
        let (service, _pool) = service().await;
        service.register(register_input("alice@example.com", "secret1")).await.unwrap();

        assert!(service.login(login_input("alice@example.com", "secret1")).await.is_ok());
        for other in ["secret2", "Secret1", "secret1 ", "secret"] {
            assert!(
                service.login(login_input("alice@example.com", other)).await.is_err(),
                "{other:?} must not authenticate"
            );
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_store_error() {
        let (service, pool) = service().await;
        pool.close().await;

        let err = service
            .login(login_input("alice@example.com", "secret1"))
            .await
            .expect_err("closed pool should fail");
        assert!(matches!(err, AppError::Store(_)));
    }
}
