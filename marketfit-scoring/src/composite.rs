//! Composite fitness score.
//!
//! Weighted sum of semantic similarity and the five category sub-scores,
//! discounted by data coverage, with a flat bonus for exceptional profiles.

use marketfit_core::config::ScoringConfig;
use marketfit_core::constants::SCORE_DECIMALS;
use marketfit_core::errors::ScoringError;
use marketfit_core::models::{CountryProfile, ScoreBreakdown};

use crate::categories::{
    digital, foreign_investment, macroeconomic, regulatory, trade, CategoryScorer,
};

/// Scores one candidate country. Construction validates the configuration;
/// scoring itself never fails.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    config: ScoringConfig,
    regulatory: CategoryScorer,
    macroeconomic: CategoryScorer,
    digital: CategoryScorer,
    trade: CategoryScorer,
    foreign_investment: CategoryScorer,
}

impl CompositeScorer {
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            regulatory: regulatory::scorer()?,
            macroeconomic: macroeconomic::scorer()?,
            digital: digital::scorer()?,
            trade: trade::scorer(config.trade_cap)?,
            foreign_investment: foreign_investment::scorer()?,
            config,
        })
    }

    /// Scorer with the default weights and thresholds.
    pub fn with_defaults() -> Result<Self, ScoringError> {
        Self::new(ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Final score rounded to four decimal places.
    pub fn score(&self, vector_similarity: f64, profile: &CountryProfile) -> f64 {
        self.score_breakdown(vector_similarity, profile).score
    }

    /// Score plus every intermediate value.
    pub fn score_breakdown(&self, vector_similarity: f64, profile: &CountryProfile) -> ScoreBreakdown {
        let vector = if vector_similarity.is_finite() {
            vector_similarity
        } else {
            0.0
        };

        let regulatory = self.regulatory.score(profile);
        let macroeconomic = self.macroeconomic.score(profile);
        let digital = self.digital.score(profile);
        let trade = self.trade.score(profile);
        let foreign_investment = self.foreign_investment.score(profile);

        let covered = regulatory.covered
            + macroeconomic.covered
            + digital.covered
            + trade.covered
            + foreign_investment.covered;
        let checked = regulatory.checked
            + macroeconomic.checked
            + digital.checked
            + trade.checked
            + foreign_investment.checked;
        let coverage = if checked == 0 {
            0.0
        } else {
            covered as f64 / checked as f64
        };
        let floor = self.config.coverage_floor;
        let coverage_adjust = floor + (1.0 - floor) * coverage;

        let w = &self.config.weights;
        let weighted_sum = vector * w.vector
            + regulatory.score * w.regulatory
            + macroeconomic.score * w.macroeconomic
            + digital.score * w.digital
            + trade.score * w.trade
            + foreign_investment.score * w.foreign_investment;

        let mut raw = weighted_sum * coverage_adjust;
        let boost_applied =
            self.config
                .boost
                .applies(vector, digital.score, foreign_investment.score);
        if boost_applied {
            raw += self.config.boost.amount;
        }
        let score = round_to(raw, SCORE_DECIMALS);

        tracing::debug!(
            country = %profile.country_code,
            vector,
            coverage,
            boost_applied,
            score,
            "composite score"
        );

        ScoreBreakdown {
            vector_similarity: vector,
            regulatory,
            macroeconomic,
            digital,
            trade,
            foreign_investment,
            coverage,
            coverage_adjust,
            weighted_sum,
            boost_applied,
            score,
        }
    }
}

/// Largest `decimals` for which `mantissa * 10^decimals` fits in a `u128`.
const MAX_EXACT_DECIMALS: u32 = 18;

/// Round to `decimals` places, ties to even, deciding on the exact binary
/// value of `value` rather than on `value * 10^decimals`.
///
/// `0.03125` is stored exactly and is a true tie, so it rounds to `0.0312`.
/// The result is the double nearest to the rounded decimal.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value == 0.0 || decimals > MAX_EXACT_DECIMALS {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };
    if exponent >= 0 {
        // Already an integer.
        return value;
    }

    // |value| * 10^decimals == scaled * 2^exponent, exactly.
    let scale = 10u128.pow(decimals);
    let scaled = u128::from(mantissa) * scale;
    let shift = exponent.unsigned_abs();
    let rounded = if shift >= 128 {
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if remainder > half || (remainder == half && quotient & 1 == 1) {
            quotient + 1
        } else {
            quotient
        }
    };

    (rounded as f64 / scale as f64).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_four_places() {
        assert_eq!(round_to(0.670_795_17, 4), 0.6708);
        assert_eq!(round_to(0.123_44, 4), 0.1234);
        assert_eq!(round_to(0.642_849_9, 4), 0.6428);
        assert_eq!(round_to(0.0, 4), 0.0);
        assert_eq!(round_to(1.0, 4), 1.0);
    }

    #[test]
    fn exact_ties_round_to_even() {
        // Each of these is a dyadic rational, so the tie is real.
        assert_eq!(round_to(0.031_25, 4), 0.0312);
        assert_eq!(round_to(0.093_75, 4), 0.0938);
        assert_eq!(round_to(0.156_25, 4), 0.1562);
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-0.031_25, 4), -0.0312);
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 0.1 + 0.2 is stored above 0.3, 1.005 below its decimal spelling.
        assert_eq!(round_to(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn invalid_weights_fail_construction() {
        let mut config = ScoringConfig::default();
        config.weights.vector = 0.5;
        assert!(matches!(
            CompositeScorer::new(config),
            Err(ScoringError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn non_finite_similarity_counts_as_zero() {
        let scorer = CompositeScorer::with_defaults().unwrap();
        let profile = CountryProfile::empty("XXX");
        assert_eq!(scorer.score(f64::NAN, &profile), 0.0);
    }
}
