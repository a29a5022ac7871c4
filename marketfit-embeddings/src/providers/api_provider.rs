//! HTTP embedding provider for OpenAI-compatible `/embeddings` endpoints
//! (Gemini's compatibility layer by default).

use std::time::Duration;

use marketfit_core::config::EmbeddingConfig;
use marketfit_core::errors::{EmbeddingError, MarketfitResult};
use marketfit_core::traits::IEmbeddingProvider;
use marketfit_core::RetryPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Blocking embedding API client. Transient failures are retried through the
/// configured [`RetryPolicy`]. An exhausted request fails on its own; the next
/// request is sent as usual.
pub struct ApiProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    dimensions: usize,
    retry: RetryPolicy,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
    dimensions: usize,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn from_config(config: &EmbeddingConfig, retry: RetryPolicy) -> MarketfitResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("HTTP client error: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            dimensions: config.dimensions,
            retry,
        })
    }

    fn request_embeddings(&self, texts: &[String]) -> MarketfitResult<Vec<Vec<f32>>> {
        if !self.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let result = self.retry.run("embedding_request", |attempt| {
            if attempt > 0 {
                debug!(attempt, model = %self.model, "retrying embedding request");
            }
            self.send_request(texts)
        });
        if let Err(e) = &result {
            warn!(model = %self.model, inputs = texts.len(), error = %e, "embedding request failed");
        }
        result
    }

    fn send_request(&self, texts: &[String]) -> MarketfitResult<Vec<Vec<f32>>> {
        let body = EmbedRequest {
            model: &self.model,
            input: texts,
            dimensions: self.dimensions,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("HTTP error: {e}"),
        })?;

        let status = response.status();
        let text = response.text().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("failed to read response body: {e}"),
        })?;
        if !status.is_success() {
            return Err(EmbeddingError::HttpStatus {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        parse_embed_response(&text, texts.len(), self.dimensions)
    }
}

/// Decode an `/embeddings` response body into `expected` vectors of
/// `dimensions` floats, ordered by the response `index` field.
///
/// Longer vectors are truncated and shorter ones zero-padded. A body that is
/// not valid JSON is a serialization error and is never retried.
pub fn parse_embed_response(
    body: &str,
    expected: usize,
    dimensions: usize,
) -> MarketfitResult<Vec<Vec<f32>>> {
    let response: EmbedResponse = serde_json::from_str(body)?;

    if response.data.len() != expected {
        return Err(EmbeddingError::InferenceFailed {
            reason: format!(
                "expected {expected} embeddings, got {}",
                response.data.len()
            ),
        }
        .into());
    }

    let mut data = response.data;
    data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));

    data.into_iter()
        .map(|d| {
            let mut v = d.embedding;
            if v.is_empty() {
                return Err(EmbeddingError::EmptyEmbedding.into());
            }
            if v.len() != dimensions {
                debug!(actual = v.len(), dimensions, "resizing embedding");
            }
            v.resize(dimensions, 0.0);
            Ok(v)
        })
        .collect()
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> MarketfitResult<Vec<f32>> {
        let mut batch = self.request_embeddings(&[text.to_string()])?;
        batch.pop().ok_or_else(|| EmbeddingError::EmptyEmbedding.into())
    }

    fn embed_batch(&self, texts: &[String]) -> MarketfitResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_is_reordered_by_index() {
        let body = r#"{"data": [
            {"index": 1, "embedding": [0.0, 1.0]},
            {"index": 0, "embedding": [1.0, 0.0]}
        ]}"#;
        let vecs = parse_embed_response(body, 2, 2).unwrap();
        assert_eq!(vecs, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn response_is_resized_to_dimensions() {
        let body = r#"{"data": [{"embedding": [1.0, 2.0, 3.0, 4.0]}]}"#;
        assert_eq!(parse_embed_response(body, 1, 2).unwrap()[0], vec![1.0, 2.0]);
        assert_eq!(
            parse_embed_response(body, 1, 6).unwrap()[0],
            vec![1.0, 2.0, 3.0, 4.0, 0.0, 0.0]
        );
    }

    #[test]
    fn count_mismatch_is_an_error() {
        let body = r#"{"data": []}"#;
        assert!(parse_embed_response(body, 1, 2).is_err());
    }

    #[test]
    fn malformed_body_is_not_retryable() {
        let err = parse_embed_response("<html>", 1, 2).unwrap_err();
        assert!(!err.is_retryable());
    }

    #[test]
    fn missing_key_means_unavailable() {
        let provider =
            ApiProvider::from_config(&EmbeddingConfig::default(), RetryPolicy::no_retry()).unwrap();
        assert!(!provider.is_available());
        assert!(provider.embed("text").is_err());
    }
}
