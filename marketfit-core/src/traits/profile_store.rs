use crate::errors::MarketfitResult;
use crate::models::{CountryProfile, SemanticCandidate, Sector};

/// Country profile and semantic document store.
pub trait IProfileStore: Send + Sync {
    /// Fetch the flattened profile for a country. Unknown countries yield an
    /// empty profile, not an error.
    fn get_profile(&self, country_code: &str) -> MarketfitResult<CountryProfile>;

    /// Vector search restricted to documents whose sector label matches
    /// `sector` case-insensitively. Returns at most `top_k` candidates,
    /// best first.
    fn vector_search(
        &self,
        embedding: &[f32],
        sector: Sector,
        top_k: usize,
    ) -> MarketfitResult<Vec<SemanticCandidate>>;
}
