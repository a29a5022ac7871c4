use marketfit_core::CountryProfile;
use marketfit_scoring::normalize::{log_norm, norm};
use marketfit_scoring::composite::round_to;
use marketfit_scoring::CompositeScorer;
use proptest::prelude::*;
use test_fixtures::load_fixture;

// ── Linear normalization ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn norm_is_monotonic_below_max(a in -1000.0f64..100.0, b in -1000.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(norm(Some(lo), 100.0, false) <= norm(Some(hi), 100.0, false));
    }

    #[test]
    fn norm_saturates_above_max(v in 100.0f64..1e12) {
        prop_assert_eq!(norm(Some(v), 100.0, false), 1.0);
        prop_assert_eq!(norm(Some(v), 100.0, true), 0.0);
    }

    #[test]
    fn inverted_norm_is_complement(v in -1e6f64..1e6, max in 1.0f64..1000.0) {
        prop_assert_eq!(norm(Some(v), max, true), 1.0 - norm(Some(v), max, false));
    }
}

// ── Log normalization ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn log_norm_is_zero_for_non_positive(v in -1e12f64..=0.0) {
        prop_assert_eq!(log_norm(Some(v)), 0.0);
    }

    #[test]
    fn log_norm_is_strictly_increasing(a in 0.001f64..1e9) {
        let b = a * 1.01 + 1.0;
        prop_assert!(log_norm(Some(a)) < log_norm(Some(b)));
        prop_assert!(log_norm(Some(a)) > 0.0);
    }
}

#[test]
fn log_norm_exceeds_one_for_large_values() {
    assert!(log_norm(Some(1e6)) > 1.0);
    assert_eq!(log_norm(None), 0.0);
}

// ── Composite ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn composite_has_at_most_four_decimals(v in 0.0f64..1.0) {
        let scorer = CompositeScorer::with_defaults().unwrap();
        let profile: CountryProfile = load_fixture("golden/profiles/ken_full.json");
        let score = scorer.score(v, &profile);
        let scaled = score * 10_000.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn empty_profile_scores_discounted_similarity(v in 0.0f64..1.0) {
        let scorer = CompositeScorer::with_defaults().unwrap();
        let score = scorer.score(v, &CountryProfile::empty("NON"));
        let expected = round_to(0.5 * v * 0.40, 4);
        prop_assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn higher_similarity_never_lowers_the_score(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let scorer = CompositeScorer::with_defaults().unwrap();
        let profile: CountryProfile = load_fixture("golden/profiles/nga_full.json");
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scorer.score(lo, &profile) <= scorer.score(hi, &profile));
    }
}
