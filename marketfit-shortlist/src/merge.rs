//! Cross-sector candidate merge.

use std::collections::{BTreeSet, HashMap};

use marketfit_core::models::SemanticCandidate;
use marketfit_core::Sector;

/// A country to score, with the similarity it will be scored from.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedCandidate {
    pub country_code: String,
    /// Similarity from the first sector that surfaced the country.
    pub similarity: f64,
    pub sectors: BTreeSet<Sector>,
}

/// Merge per-sector candidate lists, given in classification order.
///
/// A country's similarity comes from the first sector that returned it;
/// later sectors only add their label.
// Open question: the best similarity across sectors may be the better signal,
// but first-match is the established ranking behaviour and is kept.
pub fn merge_candidates(per_sector: &[(Sector, Vec<SemanticCandidate>)]) -> Vec<MergedCandidate> {
    let mut merged: Vec<MergedCandidate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (sector, candidates) in per_sector {
        for candidate in candidates {
            match index.get(candidate.country_code.as_str()) {
                Some(&i) => {
                    merged[i].sectors.insert(*sector);
                }
                None => {
                    index.insert(candidate.country_code.as_str(), merged.len());
                    merged.push(MergedCandidate {
                        country_code: candidate.country_code.clone(),
                        similarity: candidate.similarity,
                        sectors: BTreeSet::from([*sector]),
                    });
                }
            }
        }
    }
    merged
}
