// src/core/scanner.rs
use crate::core::rewriter::rewrite_file;
use crate::models::{FileReport, Mode};
use crate::utils::{print_banner, print_report};
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;


/// Directory holding the C sources, relative to the working directory.
pub const SRC_DIR: &str = "Src";

/// File name pattern for C sources.
pub const SOURCE_GLOB: &str = "*.c";

/// Lists the C source files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Symlinks are followed, so a link to
/// a regular `.c` file is included; a link whose target is gone is skipped.
/// Names that are not valid UTF-8 are matched on their lossy form.
///
/// # Errors
///
/// This function may return an error if the directory cannot be read.
#[inline]
pub fn source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(SOURCE_GLOB)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_broken_link(&err) => continue,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to scan directory: {}", dir.display()));
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if pattern.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// An entry inside the directory (not the directory itself) that could not be
/// resolved, e.g. a dangling symlink.
fn is_broken_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

/// Rewrites every C source file directly inside `dir`.
///
/// Writes the absolute directory path to `out` once, then the report of each
/// file as soon as it has been rewritten. A missing directory is not an error:
/// nothing is written and no reports are returned.
///
/// # Arguments
///
/// * `dir` - The source directory, absolute or relative to the working directory
/// * `mode` - How trace lines are transformed
/// * `out` - Where the progress log goes (stdout for the binary)
///
/// # Returns
///
/// * `Ok(Vec<FileReport>)` - One report per rewritten file, in file name order
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined
/// * The directory cannot be read
/// * Any source file cannot be read or written back
/// * The log cannot be written to `out`
///
/// Files rewritten before the failing one stay rewritten.
#[inline]
pub fn scan_source_dir(dir: &Path, mode: Mode, out: &mut impl Write) -> Result<Vec<FileReport>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };
    print_banner(out, &absolute_dir)?;

    let mut reports = Vec::new();
    for path in source_files(dir)? {
        let report = rewrite_file(&path, mode)?;
        print_report(out, &report)?;
        reports.push(report);
    }

    Ok(reports)
}
