//! marketfit CLI
//!
//! # Commands
//!
//! - `shortlist <TEXT>`: rank countries for a business description
//! - `ingest`: load profile and semantic documents into the store
//! - `embed`: backfill embeddings for stored semantic documents
//! - `sectors`: list the sector labels
//!
//! Exit codes: 0 success, 1 any error (message on stderr).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use marketfit_cli::commands::{self, EmbedArgs, IngestArgs, ShortlistArgs};
use marketfit_cli::App;
use marketfit_observability::{default_filter, init_tracing_with_filter};

/// Country shortlisting for startup market expansion.
#[derive(Parser)]
#[command(name = "marketfit")]
#[command(version)]
#[command(about = "Rank candidate countries for a startup's market expansion")]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./marketfit.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keyword classifier and TF-IDF embeddings; no network calls.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank countries for a business description
    Shortlist(ShortlistArgs),
    /// Load profile and semantic documents into the store
    Ingest(IngestArgs),
    /// Embed stored semantic documents that lack a vector
    Embed(EmbedArgs),
    /// List sector labels
    Sectors,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Commands::Sectors = cli.command {
        return commands::sectors::run(&mut out);
    }

    let app = App::load(cli.config.as_deref(), cli.offline)?;
    let level = match cli.verbose {
        0 => app.config.observability.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    init_tracing_with_filter(&default_filter(level), app.config.observability.json_logs);

    match &cli.command {
        Commands::Shortlist(args) => commands::shortlist::run(&app, args, &mut out)?,
        Commands::Ingest(args) => commands::ingest::run(&app, args, &mut out)?,
        Commands::Embed(args) => commands::embed::run(&app, args, &mut out)?,
        Commands::Sectors => commands::sectors::run(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
