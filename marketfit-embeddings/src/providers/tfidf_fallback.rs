//! Hashed TF-IDF fallback provider.
//!
//! Deterministic, offline, always available. Unigrams and adjacent bigrams
//! are hashed into fixed buckets with a sign bit, weighted by sublinear term
//! frequency and a length-based IDF approximation, then L2-normalized.

use std::collections::HashMap;

use marketfit_core::errors::MarketfitResult;
use marketfit_core::traits::IEmbeddingProvider;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "of", "on", "or", "our", "that", "the", "their", "this", "to", "we", "with",
];

/// Bigrams count for less than single terms.
const BIGRAM_WEIGHT: f32 = 0.5;

pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a; the low bits pick the bucket, the top bit the sign.
    fn hash_feature(feature: &str) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x0100_0000_01b3);
        }
        h
    }

    /// Lowercase alphanumeric tokens of two or more characters, minus
    /// stopwords.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
            .filter(|s| !STOPWORDS.contains(&s.as_str()))
            .collect()
    }

    fn features(tokens: &[String]) -> HashMap<String, f32> {
        let mut counts: HashMap<String, f32> = HashMap::new();
        for tok in tokens {
            *counts.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += BIGRAM_WEIGHT;
        }
        counts
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        for (feature, count) in Self::features(&tokens) {
            let tf = 1.0 + count.ln().max(0.0);
            let idf = 1.0 + (feature.chars().count() as f32).ln();
            let h = Self::hash_feature(&feature);
            let bucket = (h % self.dimensions as u64) as usize;
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            vec[bucket] += sign * tf * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> MarketfitResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> MarketfitResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}
