//! Digital infrastructure and readiness.
//!
//! Connectivity, ownership, literacy, e-government, social media, and
//! cybersecurity are higher-is-better; device cost and the three mobile tax
//! burdens are lower-is-better.

use marketfit_core::errors::ScoringError;

use super::{CategoryScorer, FieldSpec};

pub const NAME: &str = "digital";

pub const FIELDS: [FieldSpec; 11] = [
    FieldSpec::higher("digital_connectivity.gsma_connectivity_index"),
    FieldSpec::higher("digital_connectivity.mobile_broadband_coverage_percent"),
    FieldSpec::higher("digital_connectivity.mobile_ownership_percent"),
    FieldSpec::lower("connectivity.affordability.device_affordability_40pct_usd"),
    FieldSpec::lower("connectivity.affordability.tax_mobile_data_percent"),
    FieldSpec::lower("connectivity.affordability.tax_handsets_percent"),
    FieldSpec::lower("connectivity.affordability.sector_specific_taxes_percent"),
    FieldSpec::higher("connectivity.consumer_readiness.literacy_percent"),
    FieldSpec::higher("connectivity.content_and_services.e_government_score"),
    FieldSpec::higher("connectivity.content_and_services.social_media_penetration_percent"),
    FieldSpec::higher("connectivity.online_security.cybersecurity_index_score"),
];

pub fn scorer() -> Result<CategoryScorer, ScoringError> {
    CategoryScorer::new(NAME, FIELDS.to_vec())
}
