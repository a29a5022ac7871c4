//! Final ordering of scored countries.

use std::cmp::Ordering;

use marketfit_core::ScoredCountry;

/// Sort by score descending, ties by country code ascending, then keep the
/// first `top_n`. `top_n = 0` yields nothing; no padding.
pub fn rank_and_truncate(mut scored: Vec<ScoredCountry>, top_n: usize) -> Vec<ScoredCountry> {
    scored.sort_by(compare);
    scored.truncate(top_n);
    scored
}

fn compare(a: &ScoredCountry, b: &ScoredCountry) -> Ordering {
    b.aggregate_score
        .total_cmp(&a.aggregate_score)
        .then_with(|| a.country_code.cmp(&b.country_code))
}
