// src/utils.rs
use crate::models::FileReport;
use std::io::{self, Write};
use std::path::Path;

/// # Errors
///
/// Fails if `out` cannot be written to.
pub fn print_banner(out: &mut impl Write, dir: &Path) -> io::Result<()> {
    writeln!(out, "Inspecting \"{}\" source directory\n", dir.display())
}

/// Writes the warnings and log entries for one file.
///
/// The `*** <path>` header only appears when there is at least one entry.
///
/// # Errors
///
/// Fails if `out` cannot be written to.
pub fn print_report(out: &mut impl Write, report: &FileReport) -> io::Result<()> {
    if report.mixed_newlines {
        writeln!(out, "!!! Bad Newline\n")?;
    }
    if report.is_quiet() {
        return Ok(());
    }

    writeln!(out, "*** {}", report.path.display())?;
    for entry in &report.entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}
