use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic retrieval configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum candidates requested from the store per sector.
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_RETRIEVAL_TOP_K,
        }
    }
}
