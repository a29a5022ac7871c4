//! In-memory collaborators for shortlist tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use marketfit_core::errors::{ClassificationError, MarketfitResult, StorageError};
use marketfit_core::models::{CountryProfile, SemanticCandidate};
use marketfit_core::traits::{IEmbeddingProvider, IProfileStore, ISectorClassifier};
use marketfit_core::{MarketfitConfig, Sector};
use marketfit_shortlist::ShortlistEngine;

pub struct FixedClassifier {
    pub answer: Option<Vec<Sector>>,
}

impl FixedClassifier {
    pub fn returning(sectors: &[Sector]) -> Self {
        Self {
            answer: Some(sectors.to_vec()),
        }
    }

    pub fn failing() -> Self {
        Self { answer: None }
    }
}

impl ISectorClassifier for FixedClassifier {
    fn classify(&self, _text: &str, _max_results: usize) -> MarketfitResult<Vec<Sector>> {
        match &self.answer {
            Some(sectors) => Ok(sectors.clone()),
            None => Err(ClassificationError::RequestFailed {
                reason: "upstream unavailable".into(),
            }
            .into()),
        }
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

pub struct FixedEmbedder {
    pub vector: Vec<f32>,
}

impl FixedEmbedder {
    pub fn new() -> Self {
        Self {
            vector: vec![0.1, 0.2, 0.3],
        }
    }
}

impl IEmbeddingProvider for FixedEmbedder {
    fn embed(&self, _text: &str) -> MarketfitResult<Vec<f32>> {
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Canned search results per sector plus a profile table.
#[derive(Default)]
pub struct MemoryStore {
    pub results: HashMap<Sector, Vec<SemanticCandidate>>,
    pub profiles: HashMap<String, CountryProfile>,
    pub fail_profiles: bool,
    pub searches: Mutex<Vec<(Sector, usize)>>,
    pub profile_fetches: AtomicUsize,
}

impl MemoryStore {
    pub fn with_results(mut self, sector: Sector, hits: &[(&str, f64)]) -> Self {
        self.results.insert(
            sector,
            hits.iter()
                .map(|(code, sim)| SemanticCandidate::new(*code, *sim))
                .collect(),
        );
        self
    }

    pub fn with_profile(mut self, profile: CountryProfile) -> Self {
        self.profiles.insert(profile.country_code.clone(), profile);
        self
    }

    pub fn searched_sectors(&self) -> Vec<Sector> {
        self.searches.lock().unwrap().iter().map(|(s, _)| *s).collect()
    }
}

impl IProfileStore for MemoryStore {
    fn get_profile(&self, country_code: &str) -> MarketfitResult<CountryProfile> {
        self.profile_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_profiles {
            return Err(StorageError::SqliteError {
                message: "database is locked".into(),
            }
            .into());
        }
        Ok(self
            .profiles
            .get(country_code)
            .cloned()
            .unwrap_or_else(|| CountryProfile::empty(country_code)))
    }

    fn vector_search(
        &self,
        _embedding: &[f32],
        sector: Sector,
        top_k: usize,
    ) -> MarketfitResult<Vec<SemanticCandidate>> {
        self.searches.lock().unwrap().push((sector, top_k));
        let mut hits = self.results.get(&sector).cloned().unwrap_or_default();
        hits.truncate(top_k);
        Ok(hits)
    }
}

pub fn engine(
    classifier: FixedClassifier,
    store: Arc<MemoryStore>,
    config: &MarketfitConfig,
) -> ShortlistEngine {
    ShortlistEngine::new(
        Arc::new(classifier),
        Arc::new(FixedEmbedder::new()),
        store,
        config,
    )
    .unwrap()
}

pub fn golden(name: &str) -> CountryProfile {
    test_fixtures::load_fixture(&format!("golden/profiles/{name}.json"))
}
