//! Macroeconomic health. Inflation, unemployment, and public debt are
//! lower-is-better.

use marketfit_core::errors::ScoringError;

use super::{CategoryScorer, FieldSpec};

pub const NAME: &str = "macroeconomic";

pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec::higher("macroeconomic_indicators.gdp_growth_percent"),
    FieldSpec::lower("macroeconomic_indicators.inflation_rate_percent"),
    FieldSpec::lower("macroeconomic_indicators.unemployment_rate_percent"),
    FieldSpec::higher("macroeconomic_indicators.current_account_balance_percent_gdp"),
    FieldSpec::lower("macroeconomic_indicators.public_debt_percent_of_gdp"),
];

pub fn scorer() -> Result<CategoryScorer, ScoringError> {
    CategoryScorer::new(NAME, FIELDS.to_vec())
}
