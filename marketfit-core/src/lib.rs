//! # marketfit-core
//!
//! Foundation crate for the marketfit shortlisting engine.
//! Defines the shared types, collaborator traits, errors, configuration,
//! constants, and the retry policy used by every external adapter.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod retry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MarketfitConfig;
pub use errors::{MarketfitError, MarketfitResult};
pub use models::{CountryProfile, IndicatorValue, ScoredCountry, Sector, SemanticCandidate};
pub use retry::RetryPolicy;
