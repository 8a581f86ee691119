//! Local bag-of-words embedding: each token is hashed into one of `dim`
//! buckets and the count vector is L2-normalised. Components are never
//! negative, so cosine similarity between two outputs stays in [0, 1].

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::{Embedder, EmbeddingError};
use crate::parsing::keywords::tokenize;

/// Tokens this short carry no topical signal.
const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    /// `dim` is clamped to at least 1.
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];
        for token in tokenize(text) {
            if token.len() < MIN_TOKEN_LEN {
                continue;
            }
            vector[self.bucket(&token)] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }

    fn bucket(&self, token: &str) -> usize {
        let hash = Sha256::digest(token.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash[..8]);
        (u64::from_le_bytes(prefix) % self.dim as u64) as usize
    }
}

#[async_trait]
impl Embedder for HashingEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }

    fn backend(&self) -> &'static str {
        "hashing"
    }
}
