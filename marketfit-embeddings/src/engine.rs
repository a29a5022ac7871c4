//! EmbeddingEngine: the entry point for query embedding.
//!
//! Wraps the configured provider with the L1 cache and implements
//! `IEmbeddingProvider` so the shortlist engine can use it directly.
//!
//! There is no runtime fallback to another provider. Stored summary vectors
//! all come from the configured provider, and a query vector from any other
//! model would be compared against an unrelated vector space. A provider
//! failure is returned to the caller.

use marketfit_core::config::EmbeddingConfig;
use marketfit_core::errors::{EmbeddingError, MarketfitResult};
use marketfit_core::traits::IEmbeddingProvider;
use marketfit_core::RetryPolicy;
use tracing::{debug, info, warn};

use crate::cache::L1MemoryCache;
use crate::providers;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    cache_namespace: String,
}

impl EmbeddingEngine {
    /// Provider from `config`, the same one the backfill job uses.
    pub fn new(config: &EmbeddingConfig, retry: RetryPolicy) -> Self {
        let provider = providers::create_provider(config, retry);
        let engine = Self::with_provider(provider, config.l1_cache_size);
        info!(
            provider = engine.active_provider(),
            dims = config.dimensions,
            "embedding engine initialized"
        );
        engine
    }

    /// Build around an explicit provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_size: u64) -> Self {
        let cache_namespace = provider.name().to_string();
        Self {
            provider,
            cache: L1MemoryCache::new(cache_size),
            cache_namespace,
        }
    }

    /// Embed a query. Failures are never cached.
    pub fn embed_query(&self, query: &str) -> MarketfitResult<Vec<f32>> {
        let key = L1MemoryCache::key(&self.cache_namespace, query);
        if let Some(vec) = self.cache.get(&key) {
            debug!("embedding cache hit");
            return Ok(vec);
        }

        let embedding = match self.provider.embed(query) {
            Ok(vec) if vec.is_empty() => return Err(EmbeddingError::EmptyEmbedding.into()),
            Ok(vec) => vec,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "query embedding failed");
                return Err(e);
            }
        };
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    pub fn cache(&self) -> &L1MemoryCache {
        &self.cache
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> MarketfitResult<Vec<f32>> {
        self.embed_query(text)
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        "marketfit-embedding-engine"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
