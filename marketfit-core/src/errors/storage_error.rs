/// Profile store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("migration v{version} failed: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt chunk for {country_code}: {reason}")]
    CorruptChunk { country_code: String, reason: String },

    #[error("ingestion failed for {path}: {reason}")]
    IngestFailed { path: String, reason: String },
}
