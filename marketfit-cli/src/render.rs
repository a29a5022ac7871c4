//! Text and JSON rendering of shortlist results.

use std::fmt::Write as _;

use marketfit_core::models::{CategoryBreakdown, ScoreBreakdown, ShortlistOutcome};
use serde_json::json;

/// Fixed-width table, one row per country. With `explain`, each row is
/// followed by its score breakdown.
pub fn outcome_table(outcome: &ShortlistOutcome, explain: bool) -> String {
    let mut text = String::new();
    let sectors: Vec<&str> = outcome.sectors.iter().map(|s| s.as_str()).collect();
    let _ = writeln!(text, "sectors: {}", sectors.join(", "));

    if outcome.is_empty() {
        let _ = writeln!(text, "no matching countries");
    } else {
        let _ = writeln!(text, "{:>3}  {:<7}  {:>6}  sectors", "#", "country", "score");
        for (rank, country) in outcome.countries.iter().enumerate() {
            let matched: Vec<&str> = country.matched_sectors.iter().map(|s| s.as_str()).collect();
            let _ = writeln!(
                text,
                "{:>3}  {:<7}  {:>6.4}  {}",
                rank + 1,
                country.country_code,
                country.aggregate_score,
                matched.join(", ")
            );
            if explain {
                if let Some(breakdown) = outcome.breakdowns.get(&country.country_code) {
                    text.push_str(&explain_lines(breakdown));
                }
            }
        }
    }

    for event in &outcome.degradations {
        let _ = writeln!(
            text,
            "note: {} degraded to {} ({})",
            event.component, event.fallback_used, event.failure
        );
    }
    text.trim_end().to_string()
}

fn explain_lines(b: &ScoreBreakdown) -> String {
    let category = |name: &str, c: &CategoryBreakdown| {
        format!("{name} {:.4} ({}/{})", c.score, c.covered, c.checked)
    };
    let mut text = String::new();
    let _ = writeln!(text, "       similarity {:.4}", b.vector_similarity);
    let _ = writeln!(
        text,
        "       {} | {} | {}",
        category("regulatory", &b.regulatory),
        category("macro", &b.macroeconomic),
        category("digital", &b.digital)
    );
    let _ = writeln!(
        text,
        "       {} | {}",
        category("trade", &b.trade),
        category("fdi", &b.foreign_investment)
    );
    let _ = writeln!(
        text,
        "       coverage {}/{} x{:.4} | weighted {:.4}{}",
        b.covered_fields(),
        b.checked_fields(),
        b.coverage_adjust,
        b.weighted_sum,
        if b.boost_applied { " | boosted" } else { "" }
    );
    text
}

/// Pretty JSON. Breakdowns are included only with `explain`.
pub fn outcome_json(outcome: &ShortlistOutcome, explain: bool) -> anyhow::Result<String> {
    let mut value = json!({
        "sectors": outcome.sectors,
        "countries": outcome.countries,
        "candidates_scored": outcome.candidates_scored,
        "degradations": outcome.degradations,
    });
    if explain {
        value["breakdowns"] = serde_json::to_value(&outcome.breakdowns)?;
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
