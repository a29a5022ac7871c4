//! Error handling for marketfit.
//! One error enum per subsystem, `thiserror` only, aggregated into
//! [`MarketfitError`].

pub mod classification_error;
pub mod config_error;
pub mod embedding_error;
pub mod marketfit_error;
pub mod scoring_error;
pub mod shortlist_error;
pub mod storage_error;

pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use marketfit_error::{MarketfitError, MarketfitResult};
pub use scoring_error::ScoringError;
pub use shortlist_error::ShortlistError;
pub use storage_error::StorageError;
