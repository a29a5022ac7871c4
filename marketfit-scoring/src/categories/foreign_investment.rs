//! Foreign direct investment, in millions of USD, log-compressed.
//!
//! Unlike the other categories this sub-score is unbounded: very large
//! inflows and stocks push it past 1.0.

use marketfit_core::errors::ScoringError;

use super::{CategoryScorer, FieldSpec};

pub const NAME: &str = "foreign_investment";

pub const FIELDS: [FieldSpec; 2] = [
    FieldSpec::log("foreign_direct_investment.fdi_net_inflows_usd_millions"),
    FieldSpec::log("foreign_direct_investment.fdi_inward_stock_usd_millions"),
];

pub fn scorer() -> Result<CategoryScorer, ScoringError> {
    CategoryScorer::new(NAME, FIELDS.to_vec())
}
