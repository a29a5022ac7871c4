//! # marketfit-embeddings
//!
//! Turns a business description into a dense vector comparable with the
//! stored country/sector summaries.
//!
//! The provider is picked once from configuration (HTTP embedding API, or
//! hashed TF-IDF when no key is configured or offline) and used for both
//! stored summaries and queries. Query results are cached in memory.

pub mod cache;
pub mod engine;
pub mod providers;

pub use cache::L1MemoryCache;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, ApiProvider, TfIdfFallback};
