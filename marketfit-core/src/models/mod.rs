//! Shared data model: profiles, sectors, candidates, and scored results.

pub mod breakdown;
pub mod candidate;
pub mod degradation_event;
pub mod profile;
pub mod scored_country;
pub mod sector;
pub mod semantic_document;
pub mod shortlist_outcome;

pub use breakdown::{CategoryBreakdown, ScoreBreakdown};
pub use candidate::SemanticCandidate;
pub use degradation_event::DegradationEvent;
pub use profile::{CountryProfile, IndicatorValue};
pub use scored_country::ScoredCountry;
pub use sector::Sector;
pub use semantic_document::SemanticDocument;
pub use shortlist_outcome::ShortlistOutcome;
