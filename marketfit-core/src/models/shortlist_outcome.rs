use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DegradationEvent, ScoreBreakdown, ScoredCountry, Sector};

/// Full result of one shortlist invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortlistOutcome {
    /// Sectors retrieval ran for, in processing order.
    pub sectors: Vec<Sector>,
    /// Ranked, truncated shortlist.
    pub countries: Vec<ScoredCountry>,
    /// Score breakdown for each country in `countries`.
    pub breakdowns: BTreeMap<String, ScoreBreakdown>,
    /// Fallbacks taken while producing this result.
    pub degradations: Vec<DegradationEvent>,
    /// Unique countries scored before truncation.
    pub candidates_scored: usize,
}

impl ShortlistOutcome {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}
