//! `marketfit embed`: backfill embeddings for semantic documents.

use std::io::Write;

use anyhow::Context;
use clap::Args;
use marketfit_observability::tracing_setup::events;
use marketfit_storage::embed_pending;

use crate::app::App;

#[derive(Args, Debug, Clone)]
pub struct EmbedArgs {
    /// Documents per batch (defaults to `embedding.batch_size`).
    #[arg(long)]
    pub batch_size: Option<usize>,
}

pub fn run(app: &App, args: &EmbedArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let store = app.open_store()?;
    let embedder = app.document_embedder();
    let batch_size = args
        .batch_size
        .unwrap_or(app.config.embedding.batch_size)
        .max(1);

    let report = embed_pending(&store, embedder.as_ref(), batch_size, &app.retry())
        .context("embedding semantic documents")?;
    events::backfill_completed(report.embedded, report.failed);

    writeln!(
        out,
        "embedded {} documents with {} ({} failed)",
        report.embedded,
        embedder.name(),
        report.failed
    )?;
    Ok(())
}
