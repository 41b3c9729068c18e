//! coach-api - Interview performance scoring service
//!
//! Serves transcript and facial analysis over HTTP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coach_api::{build_router, config::TomlConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for coach-api
#[derive(Parser, Debug)]
#[command(name = "coach-api")]
#[command(about = "Interview performance scoring service")]
#[command(version)]
struct Args {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "COACH_API_PORT")]
    port: Option<u16>,

    /// Address to bind (overrides config file)
    #[arg(long, env = "COACH_API_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = TomlConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let mut config = loaded.config.clone();

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting coach-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    loaded.log_origin();

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    match config.facial.synthetic_seed {
        Some(seed) => info!(seed, "Synthetic facial signal source (seeded)"),
        None => warn!("Synthetic facial signal source in use; requests without an emotion summary get generated data"),
    }
    info!(capacity = config.results.capacity, "Result cache capacity per kind");
    let state = AppState::synthetic(config.facial.synthetic_seed, config.results.capacity);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("coach-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
