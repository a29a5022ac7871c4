//! Trade openness. Tariffs and import duties are lower-is-better. The
//! sub-score is capped so a handful of very open economies cannot dominate.

use marketfit_core::errors::ScoringError;

use super::{CategoryScorer, FieldSpec};

pub const NAME: &str = "trade";

pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec::lower("trade_profile.average_applied_tariff_percent"),
    FieldSpec::higher("trade_profile.binding_tariff_coverage_percent"),
    FieldSpec::lower("trade_profile.import_duties_on_capital_goods_percent"),
    FieldSpec::lower("trade_profile.import_duties_on_intermediate_goods_percent"),
    FieldSpec::higher("trade_profile.duty_free_import_share_percent"),
];

pub fn scorer(cap: f64) -> Result<CategoryScorer, ScoringError> {
    Ok(CategoryScorer::new(NAME, FIELDS.to_vec())?.with_cap(cap))
}
