//! SqliteProfileStore: owns the connection, runs migrations on open, and
//! implements IProfileStore.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::debug;

use marketfit_core::config::StorageConfig;
use marketfit_core::errors::MarketfitResult;
use marketfit_core::models::{
    CountryProfile, IndicatorValue, SemanticCandidate, SemanticDocument, Sector,
};
use marketfit_core::traits::IProfileStore;

use crate::queries::semantic_ops::PendingEmbedding;
use crate::queries::{self, StoreStats};
use crate::{migrations, pragmas, to_storage_err};

/// Country profile and semantic document store backed by one SQLite
/// connection. Access is serialized through a mutex.
pub struct SqliteProfileStore {
    conn: Mutex<Connection>,
}

impl SqliteProfileStore {
    /// Open (or create) a database file with default settings.
    pub fn open(path: &Path) -> MarketfitResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open (or create) a database file.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> MarketfitResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, config.busy_timeout_ms)?;
        Self::initialize(conn)
    }

    /// Open an in-memory database (for tests and one-shot runs).
    pub fn open_in_memory() -> MarketfitResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> MarketfitResult<Self> {
        let applied = migrations::run_migrations(&conn)?;
        debug!(applied, "profile store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection.
    fn with_conn<F, T>(&self, f: F) -> MarketfitResult<T>
    where
        F: FnOnce(&Connection) -> MarketfitResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        f(&conn)
    }

    pub fn put_profile_chunk(
        &self,
        country_code: &str,
        chunk_name: &str,
        data: &BTreeMap<String, IndicatorValue>,
    ) -> MarketfitResult<()> {
        self.with_conn(|conn| queries::profile_ops::put_chunk(conn, country_code, chunk_name, data))
    }

    pub fn put_semantic(&self, doc: &SemanticDocument) -> MarketfitResult<()> {
        self.with_conn(|conn| queries::semantic_ops::put_semantic(conn, doc))
    }

    pub fn set_embedding(&self, id: i64, embedding: &[f32]) -> MarketfitResult<()> {
        self.with_conn(|conn| queries::semantic_ops::set_embedding(conn, id, embedding))
    }

    /// Up to `limit` documents still lacking an embedding, with `id > after_id`.
    pub fn pending_embeddings(
        &self,
        after_id: i64,
        limit: usize,
    ) -> MarketfitResult<Vec<PendingEmbedding>> {
        self.with_conn(|conn| queries::semantic_ops::pending_embeddings(conn, after_id, limit))
    }

    pub fn country_codes(&self) -> MarketfitResult<Vec<String>> {
        self.with_conn(queries::profile_ops::country_codes)
    }

    pub fn stats(&self) -> MarketfitResult<StoreStats> {
        self.with_conn(queries::stats)
    }

    pub fn schema_version(&self) -> MarketfitResult<u32> {
        self.with_conn(migrations::current_version)
    }
}

impl IProfileStore for SqliteProfileStore {
    fn get_profile(&self, country_code: &str) -> MarketfitResult<CountryProfile> {
        self.with_conn(|conn| queries::profile_ops::get_profile(conn, country_code))
    }

    fn vector_search(
        &self,
        embedding: &[f32],
        sector: Sector,
        top_k: usize,
    ) -> MarketfitResult<Vec<SemanticCandidate>> {
        self.with_conn(|conn| {
            queries::vector_search::search_by_sector(conn, embedding, sector, top_k)
        })
    }
}
