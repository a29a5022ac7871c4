//! Primary-then-secondary classifier.

use std::sync::Mutex;

use marketfit_core::errors::MarketfitResult;
use marketfit_core::models::DegradationEvent;
use marketfit_core::traits::ISectorClassifier;
use marketfit_core::Sector;
use tracing::warn;

/// Tries `primary`; on error classifies with `secondary` and records a
/// degradation event.
pub struct FallbackClassifier {
    primary: Box<dyn ISectorClassifier>,
    secondary: Box<dyn ISectorClassifier>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl FallbackClassifier {
    pub fn new(primary: Box<dyn ISectorClassifier>, secondary: Box<dyn ISectorClassifier>) -> Self {
        Self {
            primary,
            secondary,
            events: Mutex::new(Vec::new()),
        }
    }
}

impl ISectorClassifier for FallbackClassifier {
    fn classify(&self, text: &str, max_results: usize) -> MarketfitResult<Vec<Sector>> {
        match self.primary.classify(text, max_results) {
            Ok(sectors) => Ok(sectors),
            Err(e) => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.secondary.name(),
                    error = %e,
                    "classifier failed, using fallback"
                );
                if let Ok(mut events) = self.events.lock() {
                    events.push(DegradationEvent::new(
                        "classifier",
                        format!("{} failed: {e}", self.primary.name()),
                        self.secondary.name(),
                    ));
                }
                self.secondary.classify(text, max_results)
            }
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }

    fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        let mut drained = self
            .events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default();
        drained.extend(self.primary.drain_degradation_events());
        drained.extend(self.secondary.drain_degradation_events());
        drained
    }
}
