use serde::{Deserialize, Serialize};

use super::defaults;

/// Retry settings shared by every external adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_RETRY_MAX_ATTEMPTS,
            initial_backoff_ms: defaults::DEFAULT_RETRY_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_RETRY_MAX_BACKOFF_MS,
            multiplier: defaults::DEFAULT_RETRY_MULTIPLIER,
        }
    }
}
