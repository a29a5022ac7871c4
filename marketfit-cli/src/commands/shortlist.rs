//! `marketfit shortlist`: rank countries for a business description.

use std::io::Write;

use anyhow::Context;
use clap::Args;

use crate::app::App;
use crate::render;

#[derive(Args, Debug, Clone)]
pub struct ShortlistArgs {
    /// Business description, e.g. "AI-powered credit scoring for underbanked populations".
    pub text: String,

    /// Number of countries to return (defaults to `shortlist.default_top_n`).
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Show the score breakdown for each country.
    #[arg(long)]
    pub explain: bool,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: &App, args: &ShortlistArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let store = app.open_store()?;
    let engine = app.shortlist_engine(store)?;
    let top_n = args.top_n.unwrap_or_else(|| engine.default_top_n());

    let outcome = engine.run(&args.text, top_n).context("shortlisting")?;

    let rendered = if args.json {
        render::outcome_json(&outcome, args.explain)?
    } else {
        render::outcome_table(&outcome, args.explain)
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
