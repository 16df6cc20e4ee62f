mod config;
mod errors;
mod extract;
mod letters;
mod llm_client;
mod render;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OllamaClient;
use crate::render::LayoutConfig;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::LetterStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every setting has a local default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Coverletter API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize filesystem storage (creates upload/output dirs)
    let store = LetterStore::new(
        &config.upload_dir,
        &config.output_dir,
        &config.letter_filename,
    )?;
    info!("Letter output path: {}", store.letter_path().display());

    // Initialize LLM client
    let generator = Arc::new(OllamaClient::new(
        config.llm_endpoint.clone(),
        config.llm_model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    ));
    info!(
        "LLM client initialized (endpoint: {}, model: {})",
        config.llm_endpoint, config.llm_model
    );

    // Initialize layout config (Helvetica 12pt on US letter, 40pt margins)
    let layout = LayoutConfig::default();

    // Build app state
    let state = AppState {
        config: config.clone(),
        generator,
        store,
        layout,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
