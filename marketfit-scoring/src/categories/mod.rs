//! Category sub-scorers.
//!
//! Each category averages a fixed, ordered list of indicator families into
//! one sub-score. Missing fields contribute `0.0` to the mean (the divisor is
//! always the full field count) and are reported through the coverage count,
//! which the composite scorer turns into a separate confidence discount.

pub mod digital;
pub mod foreign_investment;
pub mod macroeconomic;
pub mod regulatory;
pub mod trade;

use marketfit_core::errors::ScoringError;
use marketfit_core::models::{CategoryBreakdown, CountryProfile};

use crate::accessor;
use crate::normalize::{self, DEFAULT_MAX_VALUE};

/// How a raw field value becomes a contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// [`normalize::norm`] against `max_value`, optionally inverted.
    Linear { max_value: f64, invert: bool },
    /// [`normalize::log_norm`].
    Log,
}

/// One indicator family inside a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Dotted path suffix after the year segment.
    pub suffix: &'static str,
    pub normalization: Normalization,
}

impl FieldSpec {
    /// Higher is better, scaled against 100.
    pub const fn higher(suffix: &'static str) -> Self {
        Self {
            suffix,
            normalization: Normalization::Linear {
                max_value: DEFAULT_MAX_VALUE,
                invert: false,
            },
        }
    }

    /// Lower is better, scaled against 100.
    pub const fn lower(suffix: &'static str) -> Self {
        Self {
            suffix,
            normalization: Normalization::Linear {
                max_value: DEFAULT_MAX_VALUE,
                invert: true,
            },
        }
    }

    /// Large monetary magnitude, log-compressed.
    pub const fn log(suffix: &'static str) -> Self {
        Self {
            suffix,
            normalization: Normalization::Log,
        }
    }

    /// Normalized contribution and whether a raw value was found.
    pub fn evaluate(&self, profile: &CountryProfile) -> (f64, bool) {
        let raw = accessor::latest(profile, self.suffix);
        let value = match self.normalization {
            Normalization::Linear { max_value, invert } => {
                normalize::norm(raw, max_value, invert)
            }
            Normalization::Log => normalize::log_norm(raw),
        };
        (value, raw.is_some())
    }
}

/// Averages a fixed field list into one sub-score.
#[derive(Debug, Clone)]
pub struct CategoryScorer {
    name: &'static str,
    fields: Vec<FieldSpec>,
    cap: Option<f64>,
}

impl CategoryScorer {
    /// Build a scorer. An empty field list or a non-positive linear range is
    /// a programming error.
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Result<Self, ScoringError> {
        if fields.is_empty() {
            return Err(ScoringError::EmptyFieldList {
                category: name.to_string(),
            });
        }
        for field in &fields {
            if let Normalization::Linear { max_value, .. } = field.normalization {
                if !max_value.is_finite() || max_value <= 0.0 {
                    return Err(ScoringError::InvalidFieldRange {
                        suffix: field.suffix.to_string(),
                        max_value,
                    });
                }
            }
        }
        Ok(Self {
            name,
            fields,
            cap: None,
        })
    }

    /// Cap the sub-score from above.
    pub fn with_cap(mut self, cap: f64) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn score(&self, profile: &CountryProfile) -> CategoryBreakdown {
        let mut total = 0.0;
        let mut covered = 0;
        for field in &self.fields {
            let (value, found) = field.evaluate(profile);
            total += value;
            if found {
                covered += 1;
            }
        }

        let mean = total / self.fields.len() as f64;
        let score = match self.cap {
            Some(cap) => mean.min(cap),
            None => mean,
        };

        CategoryBreakdown {
            score,
            covered,
            checked: self.fields.len(),
        }
    }
}
