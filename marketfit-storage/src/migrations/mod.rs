//! Schema migrations, applied in order and recorded in `schema_version`.

mod v001_profile_chunks;
mod v002_country_semantics;

use rusqlite::{params, Connection};
use tracing::info;

use marketfit_core::errors::{MarketfitResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> MarketfitResult<()>;

const MIGRATIONS: [(u32, &str, MigrationFn); 2] = [
    (1, "profile_chunks", v001_profile_chunks::migrate),
    (2, "country_semantics", v002_country_semantics::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> MarketfitResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;
    for (version, name, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
            params![version, name],
        )
        .map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        info!(version, migration = name, "applied migration");
        applied += 1;
    }
    Ok(applied)
}

/// Highest applied schema version, `0` for a fresh database.
pub fn current_version(conn: &Connection) -> MarketfitResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
