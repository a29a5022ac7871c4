use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Sector;

/// One row of a shortlist.
///
/// `aggregate_score` is computed once, from the similarity of the first
/// sector that surfaced the country. Later sector hits only extend
/// `matched_sectors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCountry {
    pub country_code: String,
    pub aggregate_score: f64,
    pub matched_sectors: BTreeSet<Sector>,
}

impl ScoredCountry {
    pub fn new(country_code: impl Into<String>, aggregate_score: f64, sector: Sector) -> Self {
        Self {
            country_code: country_code.into(),
            aggregate_score,
            matched_sectors: BTreeSet::from([sector]),
        }
    }

    /// Record another sector hit. Never touches the score.
    pub fn add_sector(&mut self, sector: Sector) {
        self.matched_sectors.insert(sector);
    }
}
