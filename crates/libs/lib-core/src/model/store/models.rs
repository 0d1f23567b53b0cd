use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::dto::UserInfo;

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view of the user, without the password hash.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Data structure for creating a new user.
///
/// The id is generated by the caller; the password must already be hashed.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl UserForCreate {
    /// Create a new `UserForCreate` instance.
    pub fn new(id: String, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}
