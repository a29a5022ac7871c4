//! `marketfit sectors`: list the classifier's label set.

use std::io::Write;

use marketfit_core::Sector;

pub fn run(out: &mut dyn Write) -> anyhow::Result<()> {
    for sector in Sector::CLASSIFIABLE {
        writeln!(out, "{sector}")?;
    }
    writeln!(out, "{}  (fallback)", Sector::General)?;
    Ok(())
}
