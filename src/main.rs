//! Serie A relay — entry point.
//!
//! Loads configuration, initialises structured logging, builds the
//! football-data client, and serves the HTTP API until Ctrl+C.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use serie_a_relay::config::AppConfig;
use serie_a_relay::relay::Relay;
use serie_a_relay::server;
use serie_a_relay::upstream::football_data::FootballDataClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let config_path = AppConfig::path_from_env();
    let cfg = AppConfig::load(&config_path)?;

    info!(
        config = %config_path,
        upstream = %cfg.upstream.base_url,
        competition = %cfg.upstream.competition,
        timeout_secs = cfg.upstream.timeout_secs,
        "Serie A relay starting up"
    );

    let token = cfg.api_token()?;
    let client = FootballDataClient::from_config(&cfg.upstream, token)?;
    let relay = Arc::new(Relay::new(Arc::new(client)));

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    server::serve(listener, relay, shutdown_signal()).await?;

    info!("Serie A relay shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("serie_a_relay=info,tower_http=info"));

    let json_logging = std::env::var("RELAY_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
