//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_core::Config;
use lib_web::{init_tracing, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing()?;

    let config = Config::from_env()?;
    config.validate()?;

    start_server(config).await
}
