use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ScoringError;

/// Weights of the six composite-score inputs. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub vector: f64,
    pub regulatory: f64,
    pub macroeconomic: f64,
    pub digital: f64,
    pub trade: f64,
    pub foreign_investment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            vector: defaults::DEFAULT_WEIGHT_VECTOR,
            regulatory: defaults::DEFAULT_WEIGHT_REGULATORY,
            macroeconomic: defaults::DEFAULT_WEIGHT_MACROECONOMIC,
            digital: defaults::DEFAULT_WEIGHT_DIGITAL,
            trade: defaults::DEFAULT_WEIGHT_TRADE,
            foreign_investment: defaults::DEFAULT_WEIGHT_FOREIGN_INVESTMENT,
        }
    }
}

impl ScoringWeights {
    pub fn as_array(&self) -> [(&'static str, f64); 6] {
        [
            ("vector", self.vector),
            ("regulatory", self.regulatory),
            ("macroeconomic", self.macroeconomic),
            ("digital", self.digital),
            ("trade", self.trade),
            ("foreign_investment", self.foreign_investment),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().map(|(_, w)| w).sum()
    }

    /// Reject negative, non-finite, or non-normalized weight tables.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, weight) in self.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringError::InvalidWeights {
                    reason: format!("{name} weight must be a non-negative number, got {weight}"),
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringError::InvalidWeights {
                reason: format!("weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

/// Exceptional-profile boost: a flat bonus for countries that are a strong
/// semantic match, digitally mature, and attract very large FDI.
///
/// The FDI threshold sits above 1.0 on purpose; only the unbounded log
/// normalization of investment figures can reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostRule {
    pub enabled: bool,
    pub min_vector_similarity: f64,
    pub min_digital: f64,
    pub min_foreign_investment: f64,
    pub amount: f64,
}

impl Default for BoostRule {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_BOOST_ENABLED,
            min_vector_similarity: defaults::DEFAULT_BOOST_MIN_VECTOR,
            min_digital: defaults::DEFAULT_BOOST_MIN_DIGITAL,
            min_foreign_investment: defaults::DEFAULT_BOOST_MIN_FOREIGN_INVESTMENT,
            amount: defaults::DEFAULT_BOOST_AMOUNT,
        }
    }
}

impl BoostRule {
    /// All three thresholds are strict.
    pub fn applies(&self, vector_similarity: f64, digital: f64, foreign_investment: f64) -> bool {
        self.enabled
            && vector_similarity > self.min_vector_similarity
            && digital > self.min_digital
            && foreign_investment > self.min_foreign_investment
    }
}

/// Composite scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Upper bound on the trade sub-score.
    pub trade_cap: f64,
    /// Coverage multiplier for a profile with no usable indicators.
    pub coverage_floor: f64,
    pub boost: BoostRule,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            trade_cap: defaults::DEFAULT_TRADE_CAP,
            coverage_floor: defaults::DEFAULT_COVERAGE_FLOOR,
            boost: BoostRule::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.weights.validate()?;
        if !(0.0..=1.0).contains(&self.coverage_floor) {
            return Err(ScoringError::InvalidWeights {
                reason: format!(
                    "coverage_floor must be between 0.0 and 1.0, got {}",
                    self.coverage_floor
                ),
            });
        }
        if !self.trade_cap.is_finite() || self.trade_cap <= 0.0 {
            return Err(ScoringError::InvalidWeights {
                reason: format!("trade_cap must be positive, got {}", self.trade_cap),
            });
        }
        Ok(())
    }
}
