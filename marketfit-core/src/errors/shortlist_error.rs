/// Shortlist orchestration errors.
#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error("business description is empty")]
    EmptyQuery,

    #[error("query embedding is empty")]
    EmptyEmbedding,

    #[error("retrieval for sector {sector} failed: {reason}")]
    RetrievalFailed { sector: String, reason: String },
}
