//! Sector-filtered cosine similarity search over stored embeddings.

use std::cmp::Ordering;

use rusqlite::{params, Connection};

use marketfit_core::errors::MarketfitResult;
use marketfit_core::models::{SemanticCandidate, Sector};

use crate::to_storage_err;

/// Search documents whose sector label matches `sector` case-insensitively.
/// Returns up to `top_k` candidates ordered by similarity descending, ties by
/// country code.
///
/// Brute-force scan: rows with a different dimensionality are skipped and
/// negative cosines are clamped to `0.0`. A zero-norm query matches nothing.
pub fn search_by_sector(
    conn: &Connection,
    query_embedding: &[f32],
    sector: Sector,
    top_k: usize,
) -> MarketfitResult<Vec<SemanticCandidate>> {
    let query_norm_sq: f64 = query_embedding.iter().map(|x| (*x as f64) * (*x as f64)).sum();
    if query_norm_sq == 0.0 || top_k == 0 {
        return Ok(vec![]);
    }
    let query_len = query_embedding.len();

    let mut stmt = conn
        .prepare(
            "SELECT country_code, embedding, dimensions FROM country_semantics
             WHERE embedding IS NOT NULL AND LOWER(sector) = LOWER(?1)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![sector.as_str()], |row| {
            let country_code: String = row.get(0)?;
            let blob: Vec<u8> = row.get(1)?;
            let dimensions: i64 = row.get(2)?;
            Ok((country_code, blob, dimensions))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut scored = Vec::new();
    for row in rows {
        let (country_code, blob, dims) = row.map_err(|e| to_storage_err(e.to_string()))?;
        if dims as usize != query_len {
            continue;
        }
        let stored = bytes_to_f32_vec(&blob, query_len);
        let sim = cosine_similarity(query_embedding, &stored).max(0.0);
        scored.push(SemanticCandidate::new(country_code, sim));
    }

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.country_code.cmp(&b.country_code))
    });
    scored.truncate(top_k);
    Ok(scored)
}

/// Convert f32 slice to bytes (little-endian).
pub(crate) fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to f32 vec.
pub(crate) fn bytes_to_f32_vec(bytes: &[u8], expected_dims: usize) -> Vec<f32> {
    let mut result = Vec::with_capacity(expected_dims);
    for chunk in bytes.chunks_exact(4) {
        result.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    result
}

/// Cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
