//! SQL query modules.

pub mod profile_ops;
pub mod semantic_ops;
pub mod vector_search;

use rusqlite::Connection;
use serde::Serialize;

use marketfit_core::errors::MarketfitResult;

use crate::to_storage_err;

/// Row counts for a quick health view of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreStats {
    pub countries: usize,
    pub profile_chunks: usize,
    pub semantic_documents: usize,
    pub embedded_documents: usize,
}

pub fn stats(conn: &Connection) -> MarketfitResult<StoreStats> {
    let count = |sql: &str| -> MarketfitResult<usize> {
        let n: i64 = conn
            .query_row(sql, [], |row| row.get(0))
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(n as usize)
    };
    Ok(StoreStats {
        countries: count("SELECT COUNT(DISTINCT country_code) FROM country_profile_chunks")?,
        profile_chunks: count("SELECT COUNT(*) FROM country_profile_chunks")?,
        semantic_documents: count("SELECT COUNT(*) FROM country_semantics")?,
        embedded_documents: count(
            "SELECT COUNT(*) FROM country_semantics WHERE embedding IS NOT NULL",
        )?,
    })
}
