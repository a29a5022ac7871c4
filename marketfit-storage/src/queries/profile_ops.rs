//! Profile chunk reads and writes.

use std::collections::BTreeMap;

use rusqlite::{params, Connection};

use marketfit_core::errors::{MarketfitResult, StorageError};
use marketfit_core::models::{CountryProfile, IndicatorValue};

use crate::to_storage_err;

/// Insert or replace one named chunk of flattened indicators.
pub fn put_chunk(
    conn: &Connection,
    country_code: &str,
    chunk_name: &str,
    data: &BTreeMap<String, IndicatorValue>,
) -> MarketfitResult<()> {
    let json = serde_json::to_string(data)?;
    conn.execute(
        "INSERT INTO country_profile_chunks (country_code, chunk_name, chunk_data)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(country_code, chunk_name) DO UPDATE SET
            chunk_data = excluded.chunk_data,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![country_code, chunk_name, json],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Merge every chunk of a country, in insertion order, into one profile.
/// Unknown countries yield an empty profile.
pub fn get_profile(conn: &Connection, country_code: &str) -> MarketfitResult<CountryProfile> {
    let mut stmt = conn
        .prepare(
            "SELECT chunk_name, chunk_data FROM country_profile_chunks
             WHERE country_code = ?1
             ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![country_code], |row| {
            let name: String = row.get(0)?;
            let data: String = row.get(1)?;
            Ok((name, data))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut chunks = Vec::new();
    for row in rows {
        let (name, data) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let chunk: BTreeMap<String, IndicatorValue> =
            serde_json::from_str(&data).map_err(|e| StorageError::CorruptChunk {
                country_code: country_code.to_string(),
                reason: format!("chunk {name}: {e}"),
            })?;
        chunks.push(chunk);
    }

    Ok(CountryProfile::from_chunks(country_code, chunks))
}

/// All country codes with at least one chunk, ascending.
pub fn country_codes(conn: &Connection) -> MarketfitResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT country_code FROM country_profile_chunks ORDER BY country_code")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<String>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
