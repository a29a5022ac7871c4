//! Offline ingestion of nested per-country year documents and semantic
//! summaries.
//!
//! A year document looks like `{"2022": {"trade_profile": {...}}, ...}`.
//! Each year becomes one stored chunk whose keys are dotted paths prefixed
//! with the year, e.g. `2022.trade_profile.average_applied_tariff_percent`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use marketfit_core::errors::{MarketfitResult, StorageError};
use marketfit_core::models::{IndicatorValue, SemanticDocument};

use crate::engine::SqliteProfileStore;

/// What an ingestion run stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IngestReport {
    pub countries: usize,
    pub chunks: usize,
    pub documents: usize,
}

/// Flatten a whole year document into one map of dotted keys.
pub fn flatten_year_document(doc: &Value) -> Result<BTreeMap<String, IndicatorValue>, StorageError> {
    let mut flat = BTreeMap::new();
    for (_, chunk) in year_chunks(doc)? {
        flat.extend(chunk);
    }
    Ok(flat)
}

/// Split a year document into `(year, flattened keys)` pairs.
pub fn year_chunks(
    doc: &Value,
) -> Result<Vec<(String, BTreeMap<String, IndicatorValue>)>, StorageError> {
    let years = doc.as_object().ok_or_else(|| StorageError::IngestFailed {
        path: "<document>".to_string(),
        reason: "top level must be an object keyed by year".to_string(),
    })?;

    let mut chunks = Vec::with_capacity(years.len());
    for (year, body) in years {
        let mut flat = BTreeMap::new();
        flatten_into(year, body, &mut flat);
        chunks.push((year.clone(), flat));
    }
    Ok(chunks)
}

fn flatten_into(prefix: &str, value: &Value, out: &mut BTreeMap<String, IndicatorValue>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(&format!("{prefix}.{key}"), child, out);
            }
        }
        leaf => {
            out.insert(prefix.to_string(), to_indicator(leaf));
        }
    }
}

fn to_indicator(value: &Value) -> IndicatorValue {
    match value {
        Value::Null => IndicatorValue::Null,
        Value::Bool(b) => IndicatorValue::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => IndicatorValue::Number(f),
            None => IndicatorValue::Other(value.clone()),
        },
        Value::String(s) => IndicatorValue::Text(s.clone()),
        other => IndicatorValue::Other(other.clone()),
    }
}

/// Load every `<CODE>.json` year document in `dir`. The upper-cased file
/// stem is the country code; each year is stored as its own chunk.
pub fn ingest_profiles_dir(store: &SqliteProfileStore, dir: &Path) -> MarketfitResult<IngestReport> {
    let entries = std::fs::read_dir(dir).map_err(|e| ingest_err(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut report = IngestReport::default();
    for path in files {
        let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        let code = code.to_ascii_uppercase();

        let content = std::fs::read_to_string(&path).map_err(|e| ingest_err(&path, e))?;
        let doc: Value = serde_json::from_str(&content).map_err(|e| ingest_err(&path, e))?;
        let chunks = year_chunks(&doc).map_err(|e| ingest_err(&path, e))?;

        for (year, data) in &chunks {
            store.put_profile_chunk(&code, year, data)?;
        }
        info!(country = %code, chunks = chunks.len(), "ingested profile");
        report.countries += 1;
        report.chunks += chunks.len();
    }
    Ok(report)
}

/// Load a JSON array of semantic documents.
pub fn ingest_semantics_file(store: &SqliteProfileStore, path: &Path) -> MarketfitResult<IngestReport> {
    let content = std::fs::read_to_string(path).map_err(|e| ingest_err(path, e))?;
    let docs: Vec<SemanticDocument> =
        serde_json::from_str(&content).map_err(|e| ingest_err(path, e))?;

    for doc in &docs {
        store.put_semantic(doc)?;
    }
    info!(path = %path.display(), documents = docs.len(), "ingested semantic documents");
    Ok(IngestReport {
        documents: docs.len(),
        ..IngestReport::default()
    })
}

fn ingest_err(path: &Path, err: impl std::fmt::Display) -> StorageError {
    StorageError::IngestFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
