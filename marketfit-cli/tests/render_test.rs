//! Table and JSON rendering.

use std::collections::BTreeMap;

use marketfit_cli::render::{outcome_json, outcome_table};
use marketfit_core::models::{
    CategoryBreakdown, DegradationEvent, ScoreBreakdown, ShortlistOutcome,
};
use marketfit_core::{ScoredCountry, Sector};

fn outcome() -> ShortlistOutcome {
    let mut ken = ScoredCountry::new("KEN", 0.6708, Sector::Fintech);
    ken.add_sector(Sector::AiMl);
    let breakdown = ScoreBreakdown {
        vector_similarity: 0.85,
        regulatory: CategoryBreakdown {
            score: 0.5,
            covered: 10,
            checked: 10,
        },
        coverage: 1.0,
        coverage_adjust: 1.0,
        weighted_sum: 0.6708,
        score: 0.6708,
        ..ScoreBreakdown::default()
    };
    ShortlistOutcome {
        sectors: vec![Sector::Fintech, Sector::AiMl],
        countries: vec![ken, ScoredCountry::new("NGA", 0.6428, Sector::Fintech)],
        breakdowns: BTreeMap::from([("KEN".to_string(), breakdown)]),
        degradations: vec![DegradationEvent::new("classifier", "timeout", "keyword")],
        candidates_scored: 2,
    }
}

#[test]
fn table_lists_ranked_rows() {
    let text = outcome_table(&outcome(), false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "sectors: fintech, AI-ML");
    assert!(lines[2].contains("KEN") && lines[2].contains("0.6708"));
    assert!(lines[2].ends_with("fintech, AI-ML"));
    assert!(lines[3].contains("NGA") && lines[3].contains("0.6428"));
    assert!(!text.contains("similarity"));
    assert_eq!(lines.last().copied(), Some("note: classifier degraded to keyword (timeout)"));
}

#[test]
fn explain_adds_breakdown_lines() {
    let text = outcome_table(&outcome(), true);
    assert!(text.contains("similarity 0.8500"));
    assert!(text.contains("regulatory 0.5000 (10/10)"));
    assert!(text.contains("coverage 10/10"));
}

#[test]
fn json_omits_breakdowns_unless_explaining() {
    let plain: serde_json::Value = serde_json::from_str(&outcome_json(&outcome(), false).unwrap()).unwrap();
    assert!(plain.get("breakdowns").is_none());
    assert_eq!(plain["countries"][0]["country_code"], "KEN");
    assert_eq!(plain["candidates_scored"], 2);

    let explained: serde_json::Value =
        serde_json::from_str(&outcome_json(&outcome(), true).unwrap()).unwrap();
    assert_eq!(explained["breakdowns"]["KEN"]["vector_similarity"], 0.85);
}
