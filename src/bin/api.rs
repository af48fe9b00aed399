//! NEFRA Dev API Server
//!
//! Run with: cargo run --bin nefra-api
//!
//! Serves the built-in featured datasets on `/api/featured-*`.
//!
//! # Configuration
//!
//! Read from the usual config locations, then environment:
//! - `NEFRA_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `NEFRA_API_PORT`: Port to listen on (default: 5000)
//! - `NEFRA_LOG_LEVEL` / `NEFRA_LOG_FORMAT`
//! - `RUST_LOG`: Overrides the log filter entirely

use nefra_connect::api::{serve, AppState};
use nefra_connect::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    nefra_connect::logging::init(&config.logging);

    tracing::info!("Starting NEFRA dev API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("CORS origins: {:?}", config.server.cors_origins);

    let state = AppState::new(config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("NEFRA dev API stopped");
    Ok(())
}
