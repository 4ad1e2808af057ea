mod agent_client;
mod config;
mod errors;
mod intent;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent_client::HttpAgentClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Goal Console v{}", env!("CARGO_PKG_VERSION"));
    info!("Console origin: {}", config.public_origin);

    // Probe the agent backend; falls back to the offline demo when configured
    let remote = Arc::new(HttpAgentClient::new(&config.api_base));
    info!("Agent backend base: {}", remote.base());
    if config.backend_is_self() {
        warn!("API_BASE is not set; the backend probe targets this console before it listens, so it will start in offline demo mode");
    }

    let state = AppState::bootstrap(config.clone(), remote).await?;
    info!(
        "Backend status: {} ({} categories)",
        state.status.label(),
        state.catalog().categories().len()
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
