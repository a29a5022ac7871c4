//! Classifier selection from configuration.

use marketfit_core::config::ClassifierConfig;
use marketfit_core::errors::MarketfitResult;
use marketfit_core::traits::ISectorClassifier;
use marketfit_core::RetryPolicy;
use tracing::{info, warn};

use crate::fallback::FallbackClassifier;
use crate::gemini::GeminiGenerator;
use crate::keyword::KeywordSectorClassifier;
use crate::llm::LlmSectorClassifier;

/// Build the configured classifier.
///
/// `"gemini"` with an API key yields the LLM classifier backed by the keyword
/// classifier; without a key, `"keyword"`, or `offline` yields the keyword
/// classifier alone.
pub fn create_classifier(
    config: &ClassifierConfig,
    retry: RetryPolicy,
    offline: bool,
) -> MarketfitResult<Box<dyn ISectorClassifier>> {
    if offline || config.provider == "keyword" {
        return Ok(Box::new(KeywordSectorClassifier::new()));
    }
    if config.provider != "gemini" {
        warn!(provider = %config.provider, "unknown classifier provider, using keywords");
        return Ok(Box::new(KeywordSectorClassifier::new()));
    }

    match GeminiGenerator::from_config(config)? {
        Some(generator) => {
            info!(model = %config.model, "using LLM sector classifier");
            Ok(Box::new(FallbackClassifier::new(
                Box::new(LlmSectorClassifier::new(generator, retry)),
                Box::new(KeywordSectorClassifier::new()),
            )))
        }
        None => {
            warn!("classifier API key not configured, using keywords");
            Ok(Box::new(KeywordSectorClassifier::new()))
        }
    }
}
