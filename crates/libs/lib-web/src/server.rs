//! # Server Setup
//!
//! Tracing initialization, application state, and HTTP server startup.
//!
//! The pool, token issuer and auth service are built once here and handed to
//! the router as [`AppState`].

// region: --- Imports
use lib_auth::TokenIssuer;
use lib_core::{create_pool, migrate, Config, DbPool, ErrorStatusMode};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::create_router;
use crate::services::AuthService;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub config: Config,
}

impl AppState {
    /// Wire the services for `config` on top of an open pool.
    pub fn new(pool: DbPool, config: Config) -> Self {
        let tokens = TokenIssuer::new(config.jwt_secret.clone(), config.jwt_expiration_hours);
        let auth = Arc::new(AuthService::new(pool, tokens));

        Self { auth, config }
    }
}

impl axum::extract::FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl axum::extract::FromRef<AppState> for ErrorStatusMode {
    fn from_ref(state: &AppState) -> Self {
        state.config.error_status_mode
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Install the global tracing subscriber.
///
/// The level comes from `LOG_LEVEL` (trace, debug, info, warn, error) and
/// defaults to `info`.
pub fn init_tracing() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(&log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    info!("Log level: {}", log_level);
    Ok(())
}

/// Initialize and start the HTTP server.
///
/// # Errors
///
/// This function will return an error if:
/// - Database connection fails
/// - Database migrations fail
/// - Server binding fails
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    info!("USER AUTH SERVICE STARTING");

    ensure_database_dir(&config.database_url)?;

    info!("Connecting to database...");
    let pool = create_pool(&config.database_url).await?;

    info!("Running database migrations...");
    migrate(&pool).await?;
    info!("Migrations complete");

    let bind_address = config.bind_address();
    let error_status_mode = config.error_status_mode;
    let app = create_router(AppState::new(pool.clone(), config));

    let listener = TcpListener::bind(&bind_address).await?;

    info!("SERVER READY: http://{}", bind_address);
    info!("Error status mode: {:?}", error_status_mode);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Create the parent directory of a file-backed SQLite database.
fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(db_path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };

    let db_path = db_path.trim_start_matches("//");
    let db_path = db_path.split('?').next().unwrap_or(db_path);
    if db_path.is_empty() || db_path.contains(":memory:") {
        return Ok(());
    }

    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!("Created database directory: {:?}", parent);
        }
    }
    info!("Database file will be at: {}", db_path);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Log server information
fn log_server_info() {
    info!(" USERS:");
    info!("   • POST /users/register");
    info!("   • POST /users/login");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
