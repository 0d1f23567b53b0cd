//! # Database Store
//!
//! Database connection pool, embedded migrations and repository implementations.

// region: --- Modules
pub mod models;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use models::{User, UserForCreate};
pub use user_repository::UserRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Migrations from the workspace `migrations/` directory, embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../../migrations");

/// Create a new SQLite connection pool.
///
/// The database file is created if missing. An in-memory URL gets a single
/// connection that never expires, since every SQLite connection would
/// otherwise open its own empty database.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePool::connect_with(options).await?
    };

    Ok(pool)
}

/// Apply pending migrations.
pub async fn migrate(pool: &DbPool) -> crate::Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
// endregion: --- Types and Functions

#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = create_pool("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    migrate(&pool).await.expect("Failed to run migrations");
    pool
}
