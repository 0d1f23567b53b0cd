//! # User Repository
//!
//! Provides database access layer for user-related operations.
//!
//! The repository performs no deduplication: callers check
//! [`UserRepository::find_by_email`] before [`UserRepository::create`]. The
//! unique index on `users.email` turns a lost race into a
//! `sqlx::Error::Database` unique violation instead of a duplicate row.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_pool, UserRepository, UserForCreate};
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//!
//! let user = UserRepository::create(
//!     &pool,
//!     UserForCreate::new(
//!         "6f1c2a9e-3b1d-4c55-9e0f-2f4b8a7d1c3e".to_string(),
//!         "Alice Doe".to_string(),
//!         "alice@example.com".to_string(),
//!         "$2b$08$...".to_string(),
//!     ),
//! ).await?;
//!
//! let found = UserRepository::find_by_email(&pool, "alice@example.com").await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

use super::models::{User, UserForCreate};
use super::DbPool;
use lib_utils::now_utc;
use sqlx::query_as;

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their email address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - User found with matching email
    /// * `Ok(None)` - No user found with that email
    /// * `Err(sqlx::Error)` - Database error occurred
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new user and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - Email already exists (UNIQUE constraint violation)
    /// - Id already exists (PRIMARY KEY violation)
    /// - Database connection fails
    pub async fn create(pool: &DbPool, user_data: UserForCreate) -> Result<User, sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user_data.id)
        .bind(&user_data.name)
        .bind(&user_data.email)
        .bind(&user_data.password_hash)
        .bind(now_utc())
        .execute(pool)
        .await?;

        Self::find_by_id(pool, &user_data.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Count users registered with `email`.
    pub async fn count_by_email(pool: &DbPool, email: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
