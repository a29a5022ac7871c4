//! Composite score verification against golden profiles and hand-computed
//! expectations.

use marketfit_core::config::ScoringConfig;
use marketfit_core::{CountryProfile, IndicatorValue};
use marketfit_scoring::categories::{digital, foreign_investment, macroeconomic, regulatory, trade};
use marketfit_scoring::composite::round_to;
use marketfit_scoring::CompositeScorer;
use std::collections::BTreeMap;
use test_fixtures::{load_fixture, scoring_cases};

fn scorer() -> CompositeScorer {
    CompositeScorer::with_defaults().unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Golden cases ─────────────────────────────────────────────────────────

#[test]
fn golden_scoring_cases_match() {
    let scorer = scorer();
    for case in scoring_cases() {
        let profile: CountryProfile = load_fixture(&case.profile);
        let breakdown = scorer.score_breakdown(case.vector_similarity, &profile);
        assert!(
            approx(breakdown.score, case.expected_score),
            "{}: expected {}, got {}",
            case.name,
            case.expected_score,
            breakdown.score
        );
        assert_eq!(breakdown.boost_applied, case.boost_applied, "{}", case.name);
    }
}

#[test]
fn full_profile_sub_scores() {
    let profile: CountryProfile = load_fixture("golden/profiles/ken_full.json");
    let b = scorer().score_breakdown(0.85, &profile);

    assert!(approx(b.regulatory.score, 0.5));
    assert!(approx(b.macroeconomic.score, 0.426));
    assert!(approx(b.digital.score, 0.5));
    assert!(approx(b.trade.score, 0.5));
    assert!((b.foreign_investment.score - 0.805_959_757_3).abs() < 1e-9);
    assert_eq!(b.covered_fields(), 33);
    assert_eq!(b.checked_fields(), 33);
    assert!(approx(b.coverage, 1.0));
    assert!(approx(b.coverage_adjust, 1.0));
}

#[test]
fn stale_years_are_ignored() {
    // KEN carries 2019 values that would score very differently.
    let ken: CountryProfile = load_fixture("golden/profiles/ken_full.json");
    let nga: CountryProfile = load_fixture("golden/profiles/nga_full.json");
    let scorer = scorer();
    assert_eq!(scorer.score(0.8, &ken), scorer.score(0.8, &nga));
}

// ── Data gaps ────────────────────────────────────────────────────────────

#[test]
fn empty_profile_collapses_to_discounted_similarity() {
    let scorer = scorer();
    let profile = CountryProfile::empty("ZZZ");
    for v in [0.0, 0.3, 0.55, 0.9, 1.0] {
        let b = scorer.score_breakdown(v, &profile);
        assert_eq!(b.regulatory.score, 0.0);
        assert_eq!(b.macroeconomic.score, 0.0);
        assert_eq!(b.digital.score, 0.0);
        assert_eq!(b.trade.score, 0.0);
        assert_eq!(b.foreign_investment.score, 0.0);
        let expected = round_to(0.5 * v * 0.40, 4);
        assert!(approx(b.score, expected), "v={v}: {} != {expected}", b.score);
    }
}

#[test]
fn non_numeric_values_are_data_gaps() {
    let mut map = BTreeMap::new();
    map.insert(
        "2022.ease_of_doing_business.overall_score".to_string(),
        IndicatorValue::Text("n/a".to_string()),
    );
    map.insert(
        "2022.ease_of_doing_business.paying_taxes.score".to_string(),
        IndicatorValue::Null,
    );
    map.insert(
        "2022.trade_profile.duty_free_import_share_percent".to_string(),
        IndicatorValue::Bool(true),
    );
    let profile = CountryProfile::new("GAP", map);
    let b = scorer().score_breakdown(0.5, &profile);
    assert_eq!(b.covered_fields(), 0);
    assert!(approx(b.score, 0.1));
}

// ── Category behavior ────────────────────────────────────────────────────

#[test]
fn trade_is_capped() {
    let mut map = BTreeMap::new();
    for field in trade::FIELDS {
        let value = match field.normalization {
            marketfit_scoring::Normalization::Linear { invert: true, .. } => 0.0,
            _ => 100.0,
        };
        map.insert(format!("2022.{}", field.suffix), IndicatorValue::Number(value));
    }
    let b = scorer().score_breakdown(0.0, &CountryProfile::new("OPN", map));
    assert!(approx(b.trade.score, 0.8));
}

#[test]
fn foreign_investment_is_unbounded() {
    let mut map = BTreeMap::new();
    for field in foreign_investment::FIELDS {
        map.insert(format!("2022.{}", field.suffix), IndicatorValue::Number(1e12));
    }
    let b = scorer().score_breakdown(0.0, &CountryProfile::new("BIG", map));
    assert!(b.foreign_investment.score > 2.0);
}

#[test]
fn field_counts_are_fixed() {
    assert_eq!(regulatory::FIELDS.len(), 10);
    assert_eq!(macroeconomic::FIELDS.len(), 5);
    assert_eq!(digital::FIELDS.len(), 11);
    assert_eq!(trade::FIELDS.len(), 5);
    assert_eq!(foreign_investment::FIELDS.len(), 2);
}

// ── Configuration ────────────────────────────────────────────────────────

#[test]
fn disabled_boost_never_applies() {
    let mut config = ScoringConfig::default();
    config.boost.enabled = false;
    let scorer = CompositeScorer::new(config).unwrap();
    let profile: CountryProfile = load_fixture("golden/profiles/exceptional.json");
    let b = scorer.score_breakdown(0.9, &profile);
    assert!(!b.boost_applied);
    assert!(approx(b.score, 0.8463));
}

#[test]
fn custom_weights_change_the_score() {
    let mut config = ScoringConfig::default();
    config.weights.vector = 1.0;
    config.weights.regulatory = 0.0;
    config.weights.macroeconomic = 0.0;
    config.weights.digital = 0.0;
    config.weights.trade = 0.0;
    config.weights.foreign_investment = 0.0;
    let scorer = CompositeScorer::new(config).unwrap();
    let profile: CountryProfile = load_fixture("golden/profiles/nga_full.json");
    assert!(approx(scorer.score(0.78, &profile), 0.78));
}

#[test]
fn negative_weight_is_rejected() {
    let mut config = ScoringConfig::default();
    config.weights.vector = 0.6;
    config.weights.trade = -0.12;
    assert!(CompositeScorer::new(config).is_err());
}
