use serde::{Deserialize, Serialize};

/// A country returned by vector search for one sector.
///
/// `similarity` is the store's relevance score in [0, 1]. Values from
/// different sectors are not comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticCandidate {
    pub country_code: String,
    pub similarity: f64,
}

impl SemanticCandidate {
    pub fn new(country_code: impl Into<String>, similarity: f64) -> Self {
        Self {
            country_code: country_code.into(),
            similarity,
        }
    }
}
