//! Property tests for merge and ranking.

use std::collections::HashSet;

use marketfit_core::models::SemanticCandidate;
use marketfit_core::{ScoredCountry, Sector};
use marketfit_shortlist::{merge_candidates, rank_and_truncate};
use proptest::prelude::*;

fn candidates() -> impl Strategy<Value = Vec<SemanticCandidate>> {
    proptest::collection::vec(("[A-E]{3}", 0.0f64..=1.0), 0..12)
        .prop_map(|hits| {
            hits.into_iter()
                .map(|(code, sim)| SemanticCandidate::new(code, sim))
                .collect()
        })
}

proptest! {
    #[test]
    fn merge_keeps_one_row_per_country_with_first_similarity(
        first in candidates(),
        second in candidates(),
    ) {
        let per_sector = vec![(Sector::Fintech, first.clone()), (Sector::Saas, second.clone())];
        let merged = merge_candidates(&per_sector);

        let codes: HashSet<_> = merged.iter().map(|m| m.country_code.clone()).collect();
        prop_assert_eq!(codes.len(), merged.len());

        for m in &merged {
            let expected = first
                .iter()
                .chain(second.iter())
                .find(|c| c.country_code == m.country_code)
                .map(|c| c.similarity);
            prop_assert_eq!(Some(m.similarity), expected);
        }
    }

    #[test]
    fn ranking_is_sorted_and_bounded(
        scores in proptest::collection::vec(("[A-Z]{3}", 0.0f64..=1.0), 0..20),
        top_n in 0usize..25,
    ) {
        let rows: Vec<ScoredCountry> = scores
            .iter()
            .map(|(code, score)| ScoredCountry::new(code.clone(), *score, Sector::General))
            .collect();
        let total = rows.len();
        let ranked = rank_and_truncate(rows, top_n);

        prop_assert_eq!(ranked.len(), total.min(top_n));
        for pair in ranked.windows(2) {
            let ordered = pair[0].aggregate_score > pair[1].aggregate_score
                || (pair[0].aggregate_score == pair[1].aggregate_score
                    && pair[0].country_code <= pair[1].country_code);
            prop_assert!(ordered);
        }
    }
}
