//! Configuration for every marketfit subsystem.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`MARKETFIT_*`)
//! 2. Config file (`marketfit.toml` or the path passed to [`MarketfitConfig::load`])
//! 3. Compiled defaults from [`defaults`]

pub mod classifier_config;
pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod retry_config;
pub mod scoring_config;
pub mod shortlist_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classifier_config::ClassifierConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use retry_config::RetryConfig;
pub use scoring_config::{BoostRule, ScoringConfig, ScoringWeights};
pub use shortlist_config::ShortlistConfig;
pub use storage_config::StorageConfig;

use crate::constants::MAX_SECTORS_PER_QUERY;
use crate::errors::ConfigError;

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "marketfit.toml";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketfitConfig {
    pub scoring: ScoringConfig,
    pub retrieval: RetrievalConfig,
    pub shortlist: ShortlistConfig,
    pub classifier: ClassifierConfig,
    pub embedding: EmbeddingConfig,
    pub storage: StorageConfig,
    pub retry: RetryConfig,
    pub observability: ObservabilityConfig,
}

impl MarketfitConfig {
    /// Load configuration from an optional file, apply `MARKETFIT_*`
    /// environment overrides, and validate.
    ///
    /// An explicit path that does not exist is an error. Without a path,
    /// `marketfit.toml` in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing sections and keys
    /// fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Takes a lookup function rather than reading the process environment
    /// directly so tests can supply their own variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MARKETFIT_DB_PATH") {
            self.storage.db_path = v;
        }
        if let Some(v) = lookup("MARKETFIT_EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = v;
        }
        if let Some(v) = lookup("MARKETFIT_EMBEDDING_API_KEY") {
            self.embedding.api_key = Some(v);
        }
        if let Some(v) = lookup("MARKETFIT_EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        if let Some(v) = lookup("MARKETFIT_CLASSIFIER_ENDPOINT") {
            self.classifier.endpoint = v;
        }
        if let Some(v) = lookup("MARKETFIT_CLASSIFIER_API_KEY") {
            self.classifier.api_key = Some(v);
        }
        if let Some(v) = lookup("MARKETFIT_CLASSIFIER_MODEL") {
            self.classifier.model = v;
        }
        if let Some(v) = lookup("MARKETFIT_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring
            .validate()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "scoring".to_string(),
                message: e.to_string(),
            })?;
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(1..=MAX_SECTORS_PER_QUERY).contains(&self.classifier.max_sectors) {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.max_sectors".to_string(),
                message: format!("must be between 1 and {MAX_SECTORS_PER_QUERY}"),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.embedding.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retry.max_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.retry.multiplier.is_finite() || self.retry.multiplier < 1.0 {
            return Err(ConfigError::ValidationFailed {
                field: "retry.multiplier".to_string(),
                message: "must be at least 1.0".to_string(),
            });
        }
        Ok(())
    }
}
