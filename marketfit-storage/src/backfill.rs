//! Embedding backfill: embed every stored summary that has no vector yet.

use serde::Serialize;
use tracing::{info, warn};

use marketfit_core::errors::MarketfitResult;
use marketfit_core::traits::IEmbeddingProvider;
use marketfit_core::RetryPolicy;

use crate::engine::SqliteProfileStore;

/// Outcome of one backfill run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BackfillReport {
    pub embedded: usize,
    pub failed: usize,
}

/// Embed pending documents in batches of `batch_size`.
///
/// Each summary is embedded through `retry`. A document that still fails is
/// logged and left pending; the run moves past it and does not revisit it.
/// Store errors abort the run.
pub fn embed_pending(
    store: &SqliteProfileStore,
    embedder: &dyn IEmbeddingProvider,
    batch_size: usize,
    retry: &RetryPolicy,
) -> MarketfitResult<BackfillReport> {
    let batch_size = batch_size.max(1);
    let mut report = BackfillReport::default();
    let mut cursor = 0;

    loop {
        let batch = store.pending_embeddings(cursor, batch_size)?;
        let Some(last) = batch.last() else {
            break;
        };
        cursor = last.id;

        for doc in &batch {
            match retry.run("embed_summary", |_| embedder.embed(&doc.summary)) {
                Ok(embedding) if !embedding.is_empty() => {
                    store.set_embedding(doc.id, &embedding)?;
                    info!(country = %doc.country_code, sector = %doc.sector, "embedded summary");
                    report.embedded += 1;
                }
                Ok(_) => {
                    warn!(country = %doc.country_code, sector = %doc.sector, "empty embedding");
                    report.failed += 1;
                }
                Err(e) => {
                    warn!(
                        country = %doc.country_code,
                        sector = %doc.sector,
                        error = %e,
                        "failed to embed summary"
                    );
                    report.failed += 1;
                }
            }
        }
    }

    info!(
        embedded = report.embedded,
        failed = report.failed,
        provider = embedder.name(),
        "embedding backfill complete"
    );
    Ok(report)
}
