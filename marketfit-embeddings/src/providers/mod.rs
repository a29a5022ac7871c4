//! Embedding providers and provider selection.

pub mod api_provider;
pub mod tfidf_fallback;

pub use api_provider::ApiProvider;
pub use tfidf_fallback::TfIdfFallback;

use marketfit_core::config::EmbeddingConfig;
use marketfit_core::traits::IEmbeddingProvider;
use marketfit_core::RetryPolicy;
use tracing::warn;

/// Build the primary provider named by `config.provider`.
///
/// `"api"` needs an API key; without one, or for any other name, the TF-IDF
/// provider is returned.
pub fn create_provider(config: &EmbeddingConfig, retry: RetryPolicy) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "api" => match ApiProvider::from_config(config, retry) {
            Ok(provider) if provider.is_available() => Box::new(provider),
            Ok(_) => {
                warn!("embedding API key not configured, using TF-IDF");
                Box::new(TfIdfFallback::new(config.dimensions))
            }
            Err(e) => {
                warn!(error = %e, "failed to build embedding API client, using TF-IDF");
                Box::new(TfIdfFallback::new(config.dimensions))
            }
        },
        "tfidf" => Box::new(TfIdfFallback::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown embedding provider, using TF-IDF");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}
