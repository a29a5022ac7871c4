//! Span definitions per pipeline stage: shortlist, classification, embedding, retrieval.

/// Create a shortlist span.
#[macro_export]
macro_rules! shortlist_span {
    ($query_len:expr, $top_n:expr) => {
        tracing::info_span!("marketfit.shortlist", query_len = $query_len, top_n = $top_n)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($classifier:expr) => {
        tracing::info_span!("marketfit.classification", classifier = %$classifier)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("marketfit.embedding", provider = %$provider, dimension = $dimension)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($sector:expr, $top_k:expr) => {
        tracing::debug_span!("marketfit.retrieval", sector = %$sector, top_k = $top_k)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SHORTLIST: &str = "marketfit.shortlist";
    pub const CLASSIFICATION: &str = "marketfit.classification";
    pub const EMBEDDING: &str = "marketfit.embedding";
    pub const RETRIEVAL: &str = "marketfit.retrieval";
}
