//! # marketfit-storage
//!
//! SQLite persistence for country profile chunks and per-sector semantic
//! documents, plus the offline ingestion and embedding backfill jobs that
//! populate them.

pub mod backfill;
pub mod engine;
pub mod ingest;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use backfill::{embed_pending, BackfillReport};
pub use engine::SqliteProfileStore;
pub use ingest::{flatten_year_document, ingest_profiles_dir, ingest_semantics_file, IngestReport};
pub use queries::semantic_ops::PendingEmbedding;
pub use queries::StoreStats;

use marketfit_core::errors::{MarketfitError, StorageError};

/// Wrap a message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> MarketfitError {
    MarketfitError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
