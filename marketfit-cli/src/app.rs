//! Configuration and collaborator wiring shared by all commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use marketfit_classifier::create_classifier;
use marketfit_core::traits::IEmbeddingProvider;
use marketfit_core::{MarketfitConfig, RetryPolicy};
use marketfit_embeddings::{create_provider, EmbeddingEngine};
use marketfit_shortlist::ShortlistEngine;
use marketfit_storage::SqliteProfileStore;
use tracing::info;

/// Resolved configuration plus the offline switch.
pub struct App {
    pub config: MarketfitConfig,
    pub offline: bool,
}

impl App {
    /// Load config from `path` (or `marketfit.toml`), environment overrides
    /// included.
    pub fn load(path: Option<&Path>, offline: bool) -> anyhow::Result<Self> {
        let config = MarketfitConfig::load(path).context("loading configuration")?;
        Ok(Self::from_config(config, offline))
    }

    /// Offline mode swaps in the keyword classifier and TF-IDF embeddings.
    pub fn from_config(mut config: MarketfitConfig, offline: bool) -> Self {
        if offline {
            config.classifier.provider = "keyword".to_string();
            config.embedding.provider = "tfidf".to_string();
        }
        Self { config, offline }
    }

    pub fn retry(&self) -> RetryPolicy {
        RetryPolicy::from_config(&self.config.retry)
    }

    pub fn open_store(&self) -> anyhow::Result<Arc<SqliteProfileStore>> {
        let path = Path::new(&self.config.storage.db_path);
        let store = SqliteProfileStore::open_with_config(path, &self.config.storage)
            .with_context(|| format!("opening profile store at {}", path.display()))?;
        Ok(Arc::new(store))
    }

    /// The configured embedder without the TF-IDF safety net, for backfill.
    /// Stored vectors must all come from one model.
    pub fn document_embedder(&self) -> Box<dyn IEmbeddingProvider> {
        create_provider(&self.config.embedding, self.retry())
    }

    pub fn shortlist_engine(&self, store: Arc<SqliteProfileStore>) -> anyhow::Result<ShortlistEngine> {
        let classifier = create_classifier(&self.config.classifier, self.retry(), self.offline)
            .context("building sector classifier")?;
        let embedder = EmbeddingEngine::new(&self.config.embedding, self.retry());
        info!(
            classifier = classifier.name(),
            embedder = embedder.active_provider(),
            offline = self.offline,
            "shortlist engine ready"
        );
        let engine = ShortlistEngine::new(
            Arc::from(classifier),
            Arc::new(embedder),
            store,
            &self.config,
        )
        .context("building shortlist engine")?;
        Ok(engine)
    }
}
