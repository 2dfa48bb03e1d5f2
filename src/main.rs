//! Sparks Dashboard API Server
//!
//! Run with: cargo run --bin sparks
//!
//! # Configuration
//!
//! Read from `$CONFIG_DIR/sparks/config.toml` or `./sparks.toml`, then
//! overridden by environment variables:
//! - `SPARKS_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `SPARKS_API_PORT`: Port to listen on (default: 8050)
//! - `SPARKS_LOG_LEVEL`: Log level (default: info)
//! - `SPARKS_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the level

use sparks::api::{serve, AppState};
use sparks::config::{Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Sparks dashboard API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Max upload body: {} bytes, CORS origins: {:?}",
        config.api.max_body_size,
        config.api.cors_origins
    );

    let state = AppState::new(config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Sparks dashboard API stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("sparks={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
