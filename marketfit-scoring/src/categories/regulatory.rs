//! Regulatory ease: World Bank ease-of-doing-business scores.

use marketfit_core::errors::ScoringError;

use super::{CategoryScorer, FieldSpec};

pub const NAME: &str = "regulatory";

pub const FIELDS: [FieldSpec; 10] = [
    FieldSpec::higher("ease_of_doing_business.starting_business_score"),
    FieldSpec::higher("ease_of_doing_business.getting_electricity.score"),
    FieldSpec::higher("ease_of_doing_business.registering_property.score"),
    FieldSpec::higher("ease_of_doing_business.getting_credit.score"),
    FieldSpec::higher("ease_of_doing_business.protecting_minority_investors.score"),
    FieldSpec::higher("ease_of_doing_business.paying_taxes.score"),
    FieldSpec::higher("ease_of_doing_business.trading_across_borders.score"),
    FieldSpec::higher("ease_of_doing_business.enforcing_contracts.score"),
    FieldSpec::higher("ease_of_doing_business.resolving_insolvency.score"),
    FieldSpec::higher("ease_of_doing_business.overall_score"),
];

pub fn scorer() -> Result<CategoryScorer, ScoringError> {
    CategoryScorer::new(NAME, FIELDS.to_vec())
}
