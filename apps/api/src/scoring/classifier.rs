//! Role Classifier — ranks catalog roles by embedding similarity to a resume.
//!
//! Role description embeddings are computed once at startup into a `RoleIndex`
//! and never recomputed; each request embeds only the resume text.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::embedding::{cosine_similarity, Embedder, EmbeddingError};
use crate::errors::AppError;

/// Number of roles returned per classification.
pub const TOP_ROLES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub role: String,
    /// Cosine similarity as a percentage, 2 decimals, within [0, 100].
    pub confidence: f64,
}

#[derive(Debug, Clone)]
struct RoleEmbedding {
    role: String,
    vector: Vec<f32>,
}

/// Role name → description embedding, in catalog order. Immutable after build.
#[derive(Debug, Clone)]
pub struct RoleIndex {
    entries: Vec<RoleEmbedding>,
}

impl RoleIndex {
    /// Embeds every role description in one batch.
    pub async fn build(catalog: &Catalog, embedder: &dyn Embedder) -> Result<Self, EmbeddingError> {
        let descriptions: Vec<&str> = catalog
            .roles
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        let vectors = embedder.embed_batch(&descriptions).await?;
        if vectors.len() != descriptions.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: descriptions.len(),
                actual: vectors.len(),
            });
        }

        let entries: Vec<RoleEmbedding> = catalog
            .roles
            .iter()
            .zip(vectors)
            .map(|(role, vector)| RoleEmbedding {
                role: role.name.clone(),
                vector,
            })
            .collect();

        info!(
            roles = entries.len(),
            backend = embedder.backend(),
            "Role index built"
        );
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top roles for `text`, most similar first. Ties keep catalog order.
    pub async fn classify(
        &self,
        text: &str,
        embedder: &dyn Embedder,
    ) -> Result<Vec<Classification>, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Missing resume text".to_string()));
        }

        let resume_vector = embedder.embed(text).await?;
        self.rank(&resume_vector)
    }

    fn rank(&self, resume_vector: &[f32]) -> Result<Vec<Classification>, AppError> {
        let mut scored = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let similarity = cosine_similarity(resume_vector, &entry.vector)?;
            scored.push((entry.role.as_str(), similarity));
        }

        // Stable sort: equal similarities stay in catalog order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(scored
            .into_iter()
            .take(TOP_ROLES)
            .map(|(role, similarity)| Classification {
                role: role.to_string(),
                confidence: to_confidence(similarity),
            })
            .collect())
    }
}

fn to_confidence(similarity: f64) -> f64 {
    let percent = (similarity * 100.0).clamp(0.0, 100.0);
    (percent * 100.0).round() / 100.0
}
