use crate::errors::MarketfitResult;
use crate::models::{DegradationEvent, Sector};

/// Free-text business description → sector labels.
pub trait ISectorClassifier: Send + Sync {
    /// Classify `text` into at most `max_results` sectors, most relevant first.
    ///
    /// Implementations return only labels from the closed set. An error means
    /// the classifier could not produce an answer; callers fall back to
    /// [`Sector::General`].
    fn classify(&self, text: &str, max_results: usize) -> MarketfitResult<Vec<Sector>>;

    /// Human-readable classifier name.
    fn name(&self) -> &str;

    /// Fallbacks taken internally since the last call.
    fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        Vec::new()
    }
}
