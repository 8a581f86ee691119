mod catalog;
mod config;
mod embedding;
mod errors;
mod parsing;
mod routes;
mod scoring;
mod state;

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::{Config, EmbeddingConfig};
use crate::embedding::{Embedder, HashingEmbedder, HttpEmbedder};
use crate::routes::build_router;
use crate::scoring::classifier::RoleIndex;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
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

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Load the reference catalog (built-in unless CATALOG_PATH is set)
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::default(),
    };
    info!(
        roles = catalog.roles.len(),
        headings = catalog.headings.len(),
        source = config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "Catalog loaded"
    );

    // Initialize embedding backend
    let embedder = build_embedder(&config.embedding)?;

    // Precompute role description embeddings before serving
    let role_index = RoleIndex::build(&catalog, embedder.as_ref())
        .await
        .context("Failed to embed role descriptions")?;
    if role_index.is_empty() {
        bail!("Role index is empty; the catalog defines no roles");
    }
    info!("Role index ready ({} roles)", role_index.len());

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        role_index: Arc::new(role_index),
        embedder,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the embedding backend selected by configuration.
fn build_embedder(config: &EmbeddingConfig) -> Result<Arc<dyn Embedder>> {
    let embedder: Arc<dyn Embedder> = match config {
        EmbeddingConfig::Http {
            base_url,
            api_key,
            model,
        } => {
            let client = HttpEmbedder::new(base_url.as_str(), api_key.as_str(), model.as_str())
                .context("Failed to build embedding HTTP client")?;
            info!("Embedding backend: http ({base_url}, model: {})", client.model());
            Arc::new(client)
        }
        EmbeddingConfig::Hashing { dim } => {
            let hashing = HashingEmbedder::new(*dim);
            info!("Embedding backend: hashing (dim: {})", hashing.dim());
            Arc::new(hashing)
        }
    };
    Ok(embedder)
}
