//! Sector detection with the `[general]` fallback.

use marketfit_core::models::DegradationEvent;
use marketfit_core::traits::ISectorClassifier;
use marketfit_core::Sector;
use marketfit_observability::tracing_setup::events;
use tracing::debug;

/// Classify `text` into at most `max_sectors` distinct sectors.
///
/// Never fails: a classifier error or an empty answer yields `[General]` and a
/// degradation event. Events the classifier recorded internally are returned
/// alongside.
pub fn detect_sectors(
    classifier: &dyn ISectorClassifier,
    text: &str,
    max_sectors: usize,
) -> (Vec<Sector>, Vec<DegradationEvent>) {
    let _span = marketfit_observability::classification_span!(classifier.name()).entered();
    let limit = max_sectors.max(1);

    let result = classifier.classify(text, limit);
    let mut degradations = classifier.drain_degradation_events();

    let sectors = match result {
        Ok(raw) => {
            let mut sectors: Vec<Sector> = Vec::with_capacity(raw.len());
            for sector in raw {
                if !sectors.contains(&sector) {
                    sectors.push(sector);
                }
            }
            sectors.truncate(limit);
            if sectors.is_empty() {
                degradations.push(DegradationEvent::new(
                    "classifier",
                    format!("{} returned no sectors", classifier.name()),
                    Sector::General.as_str(),
                ));
                vec![Sector::General]
            } else {
                sectors
            }
        }
        Err(e) => {
            degradations.push(DegradationEvent::new(
                "classifier",
                format!("{} failed: {e}", classifier.name()),
                Sector::General.as_str(),
            ));
            vec![Sector::General]
        }
    };

    for event in &degradations {
        events::degradation_recorded(&event.component, &event.failure, &event.fallback_used);
    }
    debug!(sectors = ?sectors, "detected sectors");
    (sectors, degradations)
}
