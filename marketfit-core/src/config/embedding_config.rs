use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// "api" or "tfidf".
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Embedding dimensions. The TF-IDF fallback uses the same width so its
    /// vectors stay comparable with stored ones.
    pub dimensions: usize,
    /// L1 in-memory cache capacity (entries).
    pub l1_cache_size: u64,
    /// Documents embedded per backfill batch.
    pub batch_size: usize,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            batch_size: defaults::DEFAULT_EMBED_BATCH_SIZE,
            timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
