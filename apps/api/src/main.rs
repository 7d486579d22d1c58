mod config;
mod errors;
mod gap;
mod matching;
mod parsing;
mod reference;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::{JobCatalog, MatchScorer, WeightedMatchScorer};
use crate::reference::load_reference_data;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wevolve API v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = config.data_dir.as_deref();
    match data_dir {
        Some(dir) => info!("Reference data directory: {}", dir.display()),
        None => info!("No WEVOLVE_DATA_DIR set, using built-in reference data"),
    }

    let reference = load_reference_data(data_dir).context("Failed to load reference data")?;

    let catalog = JobCatalog::load(data_dir).context("Failed to load job catalog")?;

    let match_scorer: Arc<dyn MatchScorer> = Arc::new(WeightedMatchScorer);
    info!("Match scorer: {}", match_scorer.backend());

    let state = AppState {
        config: config.clone(),
        reference: Arc::new(reference),
        catalog: Arc::new(catalog),
        match_scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
