//! Ersatz: a synthetic-workload HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads the
//! runtime tunables from environment variables, sets up the Axum router with
//! all routes, and starts the HTTP server.

mod config;
mod error;
mod http;
mod middleware;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{RuntimeConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER};
use routes::create_router;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config::log_format() == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Load runtime tunables; malformed values fall back to the zero defaults
    let runtime_config = RuntimeConfig::from_env();

    // Create application state and router
    let state = AppState::new(runtime_config);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", DEFAULT_HOST, config::listen_port())
        .parse()
        .expect("Invalid listener address");

    http::start_server(app, addr).await?;

    Ok(())
}
