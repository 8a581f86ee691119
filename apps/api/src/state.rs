use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::embedding::Embedder;
use crate::scoring::classifier::RoleIndex;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Role description embeddings, computed once at startup.
    pub role_index: Arc<RoleIndex>,
    /// Pluggable embedding backend. Default: HashingEmbedder.
    /// Set EMBEDDING_API_URL for HttpEmbedder.
    pub embedder: Arc<dyn Embedder>,
}
