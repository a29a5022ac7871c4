use serde::{Deserialize, Serialize};

use super::defaults;

/// Sector classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// "gemini" or "keyword".
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Maximum sectors per business description.
    pub max_sectors: usize,
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_CLASSIFIER_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_CLASSIFIER_ENDPOINT.to_string(),
            model: defaults::DEFAULT_CLASSIFIER_MODEL.to_string(),
            api_key: None,
            max_sectors: defaults::DEFAULT_MAX_SECTORS,
            timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
