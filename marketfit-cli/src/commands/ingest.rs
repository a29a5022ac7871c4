//! `marketfit ingest`: load profile and semantic documents into the store.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use marketfit_observability::tracing_setup::events;
use marketfit_storage::{ingest_profiles_dir, ingest_semantics_file};

use crate::app::App;

#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    /// Directory of `<CODE>.json` year-keyed profile documents.
    #[arg(long)]
    pub profiles: Option<PathBuf>,

    /// JSON array of per-sector semantic documents.
    #[arg(long)]
    pub semantics: Option<PathBuf>,
}

pub fn run(app: &App, args: &IngestArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    if args.profiles.is_none() && args.semantics.is_none() {
        bail!("nothing to ingest: pass --profiles and/or --semantics");
    }
    let store = app.open_store()?;

    let (mut countries, mut chunks, mut documents) = (0, 0, 0);
    if let Some(dir) = &args.profiles {
        let report = ingest_profiles_dir(&store, dir)
            .with_context(|| format!("ingesting profiles from {}", dir.display()))?;
        countries += report.countries;
        chunks += report.chunks;
        writeln!(
            out,
            "profiles: {} countries, {} chunks",
            report.countries, report.chunks
        )?;
    }
    if let Some(path) = &args.semantics {
        let report = ingest_semantics_file(&store, path)
            .with_context(|| format!("ingesting semantics from {}", path.display()))?;
        documents += report.documents;
        writeln!(out, "semantics: {} documents", report.documents)?;
    }
    events::ingest_completed(countries, chunks, documents);

    let stats = store.stats()?;
    writeln!(
        out,
        "store: {} countries, {} semantic documents ({} embedded)",
        stats.countries, stats.semantic_documents, stats.embedded_documents
    )?;
    Ok(())
}
