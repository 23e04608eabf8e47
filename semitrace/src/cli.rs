// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;

use crate::core::scanner::{SRC_DIR, scan_source_dir};
use crate::models::Mode;

/// Trace enabled by uncommenting printf(), etc. lines, disabled by commenting them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// on: uncomment trace statements, off: comment them out,
    /// remove/removeall: delete standard calls for a shipping build
    #[arg(value_enum)]
    pub mode: Mode,
}

/// Rewrites the C sources under `Src` in the current directory.
///
/// # Errors
///
/// Returns the first filesystem error hit while scanning or rewriting.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let mut stdout = io::stdout().lock();
    scan_source_dir(Path::new(SRC_DIR), args.mode, &mut stdout)?;
    Ok(())
}
