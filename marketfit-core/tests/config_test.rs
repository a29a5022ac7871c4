use std::collections::HashMap;
use std::io::Write;

use marketfit_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MarketfitConfig::from_toml("").unwrap();

    // Scoring defaults
    assert_eq!(config.scoring.weights.vector, 0.40);
    assert_eq!(config.scoring.weights.regulatory, 0.15);
    assert_eq!(config.scoring.weights.macroeconomic, 0.08);
    assert_eq!(config.scoring.weights.digital, 0.17);
    assert_eq!(config.scoring.weights.trade, 0.08);
    assert_eq!(config.scoring.weights.foreign_investment, 0.12);
    assert_eq!(config.scoring.trade_cap, 0.8);
    assert_eq!(config.scoring.coverage_floor, 0.5);
    assert!(config.scoring.boost.enabled);
    assert_eq!(config.scoring.boost.amount, 0.01);

    // Retrieval / shortlist defaults
    assert_eq!(config.retrieval.top_k, 200);
    assert_eq!(config.shortlist.default_top_n, 5);
    assert!(!config.shortlist.concurrent_retrieval);

    // Classifier defaults
    assert_eq!(config.classifier.provider, "gemini");
    assert_eq!(config.classifier.max_sectors, 3);
    assert!(config.classifier.api_key.is_none());

    // Embedding defaults
    assert_eq!(config.embedding.model, "gemini-embedding-001");
    assert_eq!(config.embedding.dimensions, 3072);

    // Storage / retry / observability defaults
    assert_eq!(config.storage.db_path, "marketfit.db");
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.initial_backoff_ms, 500);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn default_weights_sum_to_one() {
    let weights = ScoringWeights::default();
    assert!((weights.sum() - 1.0).abs() < 1e-9);
    assert!(weights.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[retrieval]
top_k = 50

[shortlist]
concurrent_retrieval = true

[scoring.boost]
enabled = false
"#;
    let config = MarketfitConfig::from_toml(toml).unwrap();
    assert_eq!(config.retrieval.top_k, 50);
    assert!(config.shortlist.concurrent_retrieval);
    assert!(!config.scoring.boost.enabled);
    // Non-overridden fields keep defaults
    assert_eq!(config.scoring.boost.min_foreign_investment, 1.1);
    assert_eq!(config.shortlist.default_top_n, 5);
}

#[test]
fn config_serde_roundtrip() {
    let config = MarketfitConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = MarketfitConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = MarketfitConfig::from_toml("[retrieval\ntop_k = ").unwrap_err();
    assert!(matches!(err, marketfit_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn weights_not_summing_to_one_fail_validation() {
    let toml = r#"
[scoring.weights]
vector = 0.9
"#;
    let config = MarketfitConfig::from_toml(toml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("scoring"));
}

#[test]
fn negative_weight_fails_validation() {
    let weights = ScoringWeights {
        vector: 0.55,
        regulatory: -0.15,
        macroeconomic: 0.08,
        digital: 0.32,
        trade: 0.08,
        foreign_investment: 0.12,
    };
    assert!(weights.validate().is_err());
}

#[test]
fn zero_top_k_fails_validation() {
    let config = MarketfitConfig::from_toml("[retrieval]\ntop_k = 0").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn max_sectors_outside_closed_range_fails_validation() {
    let config = MarketfitConfig::from_toml("[classifier]\nmax_sectors = 4").unwrap();
    assert!(config.validate().is_err());
    let config = MarketfitConfig::from_toml("[classifier]\nmax_sectors = 0").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_take_priority() {
    let mut config = MarketfitConfig::default();
    let env: HashMap<&str, &str> = HashMap::from([
        ("MARKETFIT_DB_PATH", "/tmp/profiles.db"),
        ("MARKETFIT_EMBEDDING_API_KEY", "secret"),
        ("MARKETFIT_CLASSIFIER_MODEL", "gemini-2.0-flash"),
    ]);
    config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.storage.db_path, "/tmp/profiles.db");
    assert_eq!(config.embedding.api_key.as_deref(), Some("secret"));
    assert_eq!(config.classifier.model, "gemini-2.0-flash");
    // Untouched
    assert_eq!(config.embedding.model, "gemini-embedding-001");
}

#[test]
fn load_reads_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[storage]\ndb_path = \"custom.db\"").unwrap();
    let config = MarketfitConfig::load(Some(file.path())).unwrap();
    // MARKETFIT_DB_PATH is not set in the test environment.
    if std::env::var("MARKETFIT_DB_PATH").is_err() {
        assert_eq!(config.storage.db_path, "custom.db");
    }
}

#[test]
fn load_missing_explicit_file_is_an_error() {
    let err = MarketfitConfig::load(Some(std::path::Path::new("/nonexistent/marketfit.toml")))
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn boost_rule_thresholds_are_strict() {
    let rule = BoostRule::default();
    assert!(rule.applies(0.81, 0.61, 1.11));
    assert!(!rule.applies(0.8, 0.61, 1.11));
    assert!(!rule.applies(0.81, 0.6, 1.11));
    assert!(!rule.applies(0.81, 0.61, 1.1));

    let disabled = BoostRule {
        enabled: false,
        ..BoostRule::default()
    };
    assert!(!disabled.applies(0.99, 0.99, 5.0));
}
