//! Structured log events for key pipeline outcomes.

/// Log a fallback taken by a collaborator.
pub fn degradation_recorded(component: &str, failure: &str, fallback_used: &str) {
    tracing::warn!(
        event = "degradation_recorded",
        component = %component,
        failure = %failure,
        fallback_used = %fallback_used,
        "component degraded"
    );
}

/// Log a finished shortlist.
pub fn shortlist_completed(sectors: &[String], candidates_scored: usize, returned: usize) {
    tracing::info!(
        event = "shortlist_completed",
        sectors = ?sectors,
        candidates_scored,
        returned,
        "shortlist completed"
    );
}

/// Log a finished ingestion run.
pub fn ingest_completed(countries: usize, chunks: usize, documents: usize) {
    tracing::info!(
        event = "ingest_completed",
        countries,
        chunks,
        documents,
        "ingest completed"
    );
}

/// Log a finished embedding backfill.
pub fn backfill_completed(embedded: usize, failed: usize) {
    tracing::info!(
        event = "backfill_completed",
        embedded,
        failed,
        "embedding backfill completed"
    );
}
