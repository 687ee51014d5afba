//! HTTP server — Axum router exposing the relay endpoints.
//!
//! CORS is open to any origin; every request is traced.

pub mod routes;

use anyhow::{Context, Result};
use axum::{http::Method, routing::get, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use routes::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/standings", get(routes::get_standings))
        .route("/teams", get(routes::get_teams))
        .route("/teams/:team_id", get(routes::get_squad))
        .route("/scorers", get(routes::get_scorers))
        .route("/forecast/:home/:away", get(routes::get_forecast))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, "Relay listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Relay server error")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
