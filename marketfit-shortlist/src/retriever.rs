//! Per-sector candidate retrieval over the profile store.

use std::collections::HashSet;
use std::sync::Arc;

use marketfit_core::config::RetrievalConfig;
use marketfit_core::errors::{MarketfitResult, ShortlistError};
use marketfit_core::models::SemanticCandidate;
use marketfit_core::traits::IProfileStore;
use marketfit_core::Sector;
use tracing::debug;

/// Thin contract layer over [`IProfileStore::vector_search`].
///
/// Rejects an empty query vector, forwards the configured `top_k`, and keeps
/// only the first (best-ranked) hit per country within one sector.
pub struct SemanticRetriever {
    store: Arc<dyn IProfileStore>,
    top_k: usize,
}

impl SemanticRetriever {
    pub fn new(store: Arc<dyn IProfileStore>, config: &RetrievalConfig) -> Self {
        Self {
            store,
            top_k: config.top_k,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn retrieve(
        &self,
        embedding: &[f32],
        sector: Sector,
    ) -> MarketfitResult<Vec<SemanticCandidate>> {
        if embedding.is_empty() {
            return Err(ShortlistError::EmptyEmbedding.into());
        }

        let _span = marketfit_observability::retrieval_span!(sector, self.top_k).entered();
        let raw = self.store.vector_search(embedding, sector, self.top_k)?;
        let returned = raw.len();

        let mut seen = HashSet::with_capacity(raw.len());
        let mut candidates: Vec<SemanticCandidate> = raw
            .into_iter()
            .filter(|c| seen.insert(c.country_code.clone()))
            .collect();
        candidates.truncate(self.top_k);

        debug!(
            sector = %sector,
            returned,
            unique = candidates.len(),
            "retrieved candidates"
        );
        Ok(candidates)
    }
}
