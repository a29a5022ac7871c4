//! ShortlistEngine: classify → embed → retrieve per sector → score once per
//! country → rank → truncate.

use std::collections::BTreeMap;
use std::sync::Arc;

use marketfit_core::config::MarketfitConfig;
use marketfit_core::errors::{MarketfitResult, ShortlistError};
use marketfit_core::models::{ScoreBreakdown, SemanticCandidate, ShortlistOutcome};
use marketfit_core::traits::{IEmbeddingProvider, IProfileStore, ISectorClassifier};
use marketfit_core::{ScoredCountry, Sector};
use marketfit_observability::tracing_setup::events;
use marketfit_scoring::CompositeScorer;
use rayon::prelude::*;
use tracing::debug;

use crate::merge::{merge_candidates, MergedCandidate};
use crate::ranking::rank_and_truncate;
use crate::retriever::SemanticRetriever;
use crate::sectors::detect_sectors;

pub struct ShortlistEngine {
    classifier: Arc<dyn ISectorClassifier>,
    embedder: Arc<dyn IEmbeddingProvider>,
    store: Arc<dyn IProfileStore>,
    retriever: SemanticRetriever,
    scorer: CompositeScorer,
    max_sectors: usize,
    default_top_n: usize,
    concurrent: bool,
}

impl ShortlistEngine {
    /// Wire the engine. Fails only when the scoring configuration is invalid.
    pub fn new(
        classifier: Arc<dyn ISectorClassifier>,
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<dyn IProfileStore>,
        config: &MarketfitConfig,
    ) -> MarketfitResult<Self> {
        let scorer = CompositeScorer::new(config.scoring.clone())?;
        Ok(Self {
            retriever: SemanticRetriever::new(Arc::clone(&store), &config.retrieval),
            classifier,
            embedder,
            store,
            scorer,
            max_sectors: config.classifier.max_sectors,
            default_top_n: config.shortlist.default_top_n,
            concurrent: config.shortlist.concurrent_retrieval,
        })
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    pub fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    /// Ranked shortlist of at most `top_n` countries.
    pub fn shortlist(&self, text: &str, top_n: usize) -> MarketfitResult<Vec<ScoredCountry>> {
        Ok(self.run(text, top_n)?.countries)
    }

    /// Full shortlist result: sectors used, breakdowns, and any fallbacks taken.
    pub fn run(&self, text: &str, top_n: usize) -> MarketfitResult<ShortlistOutcome> {
        let query = text.trim();
        if query.is_empty() {
            return Err(ShortlistError::EmptyQuery.into());
        }
        let _span = marketfit_observability::shortlist_span!(query.len(), top_n).entered();

        let (sectors, mut degradations) =
            detect_sectors(self.classifier.as_ref(), query, self.max_sectors);

        let embedding = self.embed(query)?;
        for event in self.embedder.drain_degradation_events() {
            events::degradation_recorded(&event.component, &event.failure, &event.fallback_used);
            degradations.push(event);
        }

        let per_sector = self.retrieve_all(&embedding, &sectors)?;
        let merged = merge_candidates(&per_sector);
        debug!(unique_countries = merged.len(), "merged candidates");

        let scored = self.score_all(&merged)?;
        let candidates_scored = scored.len();

        let mut breakdowns: BTreeMap<String, ScoreBreakdown> = BTreeMap::new();
        let rows: Vec<ScoredCountry> = scored
            .into_iter()
            .map(|(row, breakdown)| {
                breakdowns.insert(row.country_code.clone(), breakdown);
                row
            })
            .collect();
        let countries = rank_and_truncate(rows, top_n);
        breakdowns.retain(|code, _| countries.iter().any(|c| &c.country_code == code));

        let labels: Vec<String> = sectors.iter().map(|s| s.as_str().to_string()).collect();
        events::shortlist_completed(&labels, candidates_scored, countries.len());

        Ok(ShortlistOutcome {
            sectors,
            countries,
            breakdowns,
            degradations,
            candidates_scored,
        })
    }

    fn embed(&self, query: &str) -> MarketfitResult<Vec<f32>> {
        let _span = marketfit_observability::embedding_span!(
            self.embedder.name(),
            self.embedder.dimensions()
        )
        .entered();
        let embedding = self.embedder.embed(query)?;
        if embedding.is_empty() {
            return Err(ShortlistError::EmptyEmbedding.into());
        }
        Ok(embedding)
    }

    /// Candidate lists in sector order. Concurrent mode still returns them in
    /// sector order, so the merge is unaffected.
    fn retrieve_all(
        &self,
        embedding: &[f32],
        sectors: &[Sector],
    ) -> MarketfitResult<Vec<(Sector, Vec<SemanticCandidate>)>> {
        if self.concurrent {
            sectors
                .par_iter()
                .map(|&sector| self.retrieve_one(embedding, sector))
                .collect()
        } else {
            sectors
                .iter()
                .map(|&sector| self.retrieve_one(embedding, sector))
                .collect()
        }
    }

    fn retrieve_one(
        &self,
        embedding: &[f32],
        sector: Sector,
    ) -> MarketfitResult<(Sector, Vec<SemanticCandidate>)> {
        Ok((sector, self.retriever.retrieve(embedding, sector)?))
    }

    fn score_all(
        &self,
        merged: &[MergedCandidate],
    ) -> MarketfitResult<Vec<(ScoredCountry, ScoreBreakdown)>> {
        if self.concurrent {
            merged.par_iter().map(|m| self.score_one(m)).collect()
        } else {
            merged.iter().map(|m| self.score_one(m)).collect()
        }
    }

    fn score_one(
        &self,
        candidate: &MergedCandidate,
    ) -> MarketfitResult<(ScoredCountry, ScoreBreakdown)> {
        let profile = self.store.get_profile(&candidate.country_code)?;
        let breakdown = self.scorer.score_breakdown(candidate.similarity, &profile);
        debug!(
            country = %candidate.country_code,
            similarity = candidate.similarity,
            score = breakdown.score,
            coverage = breakdown.coverage,
            "scored country"
        );
        let row = ScoredCountry {
            country_code: candidate.country_code.clone(),
            aggregate_score: breakdown.score,
            matched_sectors: candidate.sectors.clone(),
        };
        Ok((row, breakdown))
    }
}
