//! v002: country_semantics with optional embeddings.

use rusqlite::Connection;

use marketfit_core::errors::MarketfitResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> MarketfitResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS country_semantics (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            country_code  TEXT NOT NULL,
            sector        TEXT NOT NULL,
            summary       TEXT NOT NULL DEFAULT '',
            embedding     BLOB,
            dimensions    INTEGER,
            updated_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (country_code, sector)
        );

        CREATE INDEX IF NOT EXISTS idx_semantics_sector ON country_semantics(LOWER(sector));
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
