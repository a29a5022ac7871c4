//! v001: country_profile_chunks.

use rusqlite::Connection;

use marketfit_core::errors::MarketfitResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MarketfitResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS country_profile_chunks (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            country_code  TEXT NOT NULL,
            chunk_name    TEXT NOT NULL,
            chunk_data    TEXT NOT NULL,
            updated_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (country_code, chunk_name)
        );

        CREATE INDEX IF NOT EXISTS idx_chunks_country ON country_profile_chunks(country_code);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
