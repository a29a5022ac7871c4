//! Test fixture loader for marketfit golden profiles, scoring cases, and
//! ingestion inputs.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One golden composite-score case.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringCase {
    pub name: String,
    /// Fixture path of the flattened profile.
    pub profile: String,
    pub vector_similarity: f64,
    pub expected_score: f64,
    pub boost_applied: bool,
}

#[derive(Debug, Deserialize)]
struct ScoringCases {
    cases: Vec<ScoringCase>,
}

/// All golden composite-score cases.
pub fn scoring_cases() -> Vec<ScoringCase> {
    load_fixture::<ScoringCases>("golden/scoring/composite_cases.json").cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketfit_core::models::SemanticDocument;
    use marketfit_core::CountryProfile;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_profiles_parse() {
        let files = [
            "golden/profiles/ken_full.json",
            "golden/profiles/nga_full.json",
            "golden/profiles/exceptional.json",
            "golden/profiles/regulatory_only.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
            let profile: CountryProfile = load_fixture(f);
            assert!(!profile.is_empty(), "Empty profile fixture: {}", f);
        }
    }

    #[test]
    fn scoring_cases_reference_existing_profiles() {
        let cases = scoring_cases();
        assert_eq!(cases.len(), 5);
        for case in &cases {
            assert!(fixture_exists(&case.profile), "Missing profile for {}", case.name);
        }
    }

    #[test]
    fn ingest_inputs_parse() {
        let docs: Vec<SemanticDocument> = load_fixture("ingest/semantics.json");
        assert_eq!(docs.len(), 4);
        let ken = load_fixture_value("ingest/profiles/KEN.json");
        assert!(ken.get("2022").is_some());
        assert!(ken.get("2019").is_some());
    }
}
