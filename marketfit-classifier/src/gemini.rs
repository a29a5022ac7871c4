//! Gemini `generateContent` text generator.

use std::time::Duration;

use marketfit_core::config::ClassifierConfig;
use marketfit_core::errors::{ClassificationError, MarketfitResult};
use marketfit_core::traits::ITextGenerator;
use serde::{Deserialize, Serialize};

/// Blocking client for `{endpoint}/models/{model}:generateContent`.
pub struct GeminiGenerator {
    client: reqwest::blocking::Client,
    url: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiGenerator {
    /// `None` when no API key is configured.
    pub fn from_config(config: &ClassifierConfig) -> MarketfitResult<Option<Self>> {
        let Some(api_key) = config.api_key.clone().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| ClassificationError::RequestFailed {
                reason: format!("HTTP client error: {e}"),
            })?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Some(Self {
            client,
            url,
            model: config.model.clone(),
            api_key,
        }))
    }
}

impl ITextGenerator for GeminiGenerator {
    fn generate(&self, prompt: &str) -> MarketfitResult<String> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ClassificationError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| ClassificationError::RequestFailed {
            reason: format!("failed to read response body: {e}"),
        })?;
        if status.as_u16() == 429 {
            return Err(ClassificationError::RateLimited { reason: text }.into());
        }
        if status.is_server_error() {
            return Err(ClassificationError::RequestFailed {
                reason: format!("HTTP {status}: {text}"),
            }
            .into());
        }
        if !status.is_success() {
            return Err(ClassificationError::Rejected {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        extract_text(&text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Concatenated text parts of the first candidate.
pub fn extract_text(body: &str) -> MarketfitResult<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ClassificationError::UnparseableReply {
            reason: format!("generateContent response: {e}"),
        })?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(ClassificationError::UnparseableReply {
            reason: "empty generateContent response".to_string(),
        }
        .into());
    }
    Ok(text)
}
