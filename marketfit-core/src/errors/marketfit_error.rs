use super::{
    ClassificationError, ConfigError, EmbeddingError, ScoringError, ShortlistError,
    StorageError,
};

/// Top-level error aggregating every subsystem via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MarketfitError {
    #[error("classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("shortlist error: {0}")]
    Shortlist(#[from] ShortlistError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("degraded mode: {component} fell back to {fallback}")]
    DegradedMode { component: String, fallback: String },
}

impl MarketfitError {
    /// Whether an adapter may retry the operation that produced this error.
    ///
    /// Only transport-level failures are transient: request failures, rate
    /// limits, and 5xx / 429 statuses. Parse and validation failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Classification(ClassificationError::RequestFailed { .. })
            | Self::Classification(ClassificationError::RateLimited { .. })
            | Self::Embedding(EmbeddingError::InferenceFailed { .. }) => true,
            Self::Embedding(EmbeddingError::HttpStatus { status, .. }) => {
                *status == 429 || *status >= 500
            }
            _ => false,
        }
    }
}

pub type MarketfitResult<T> = Result<T, MarketfitError>;
