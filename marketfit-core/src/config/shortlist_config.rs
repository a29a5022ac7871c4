use serde::{Deserialize, Serialize};

use super::defaults;

/// Shortlist orchestration configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistConfig {
    /// Shortlist length used when the caller does not pass one.
    pub default_top_n: usize,
    /// Run per-sector retrieval and per-country scoring on the rayon pool.
    pub concurrent_retrieval: bool,
}

impl Default for ShortlistConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            concurrent_retrieval: defaults::DEFAULT_CONCURRENT_RETRIEVAL,
        }
    }
}
