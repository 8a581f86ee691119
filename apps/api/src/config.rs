use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
/// Matches the sentence-embedding models the role descriptions were tuned on.
const DEFAULT_EMBEDDING_DIM: usize = 384;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Where role and resume embeddings come from.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingConfig {
    /// OpenAI-compatible `/embeddings` endpoint.
    Http {
        base_url: String,
        api_key: String,
        model: String,
    },
    /// Local hashing embedder, no network.
    Hashing { dim: usize },
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub catalog_path: Option<PathBuf>,
    pub embedding: EmbeddingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let embedding = match lookup("EMBEDDING_API_URL").filter(|u| !u.trim().is_empty()) {
            Some(base_url) => EmbeddingConfig::Http {
                base_url,
                api_key: lookup("EMBEDDING_API_KEY").context(
                    "EMBEDDING_API_KEY must be set when EMBEDDING_API_URL is configured",
                )?,
                model: lookup("EMBEDDING_MODEL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            },
            None => EmbeddingConfig::Hashing {
                dim: parse_or(&lookup, "EMBEDDING_DIM", DEFAULT_EMBEDDING_DIM)?,
            },
        };

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            catalog_path: lookup("CATALOG_PATH").map(PathBuf::from),
            embedding,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
