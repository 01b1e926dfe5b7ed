//! PackWise HTTP server binary.
//!
//! Loads the model artifacts once, then serves the form flow and the JSON
//! prediction API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use predictors::ModelBundle;
use server::{AppState, RecommendationOrchestrator, build_router};

/// PackWise packaging-recommendation service
#[derive(Parser)]
#[command(name = "packwise-server")]
struct Args {
    /// Directory containing the model artifacts
    #[arg(long, default_value = "models")]
    models_dir: PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Loading model artifacts from {}", args.models_dir.display());
    let bundle = ModelBundle::load_from_files(&args.models_dir)
        .context("Failed to load model artifacts")?;
    let orchestrator = Arc::new(
        RecommendationOrchestrator::new(Arc::new(bundle))
            .context("Artifacts don't match the feature contract")?,
    );

    let app = build_router(AppState { orchestrator });

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
