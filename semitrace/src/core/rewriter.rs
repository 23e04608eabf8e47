// src/core/rewriter.rs
use crate::core::classifier::classify;
use crate::core::patterns::matches_any;
use crate::models::{FileReport, LogEntry, Mode, Newline, NewlinesSeen, Verdict};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Rebuilt file contents together with what happened to them.
#[derive(Debug)]
pub struct Rewrite {
    pub contents: String,
    pub report: FileReport,
}

/// Splits `content` into lines, pairing each with the terminator that ended it.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The last line has no
/// terminator if the file does not end with one.
#[must_use]
pub fn split_lines(content: &str) -> Vec<(&str, Option<Newline>)> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while let Some(&byte) = bytes.get(pos) {
        let newline = match byte {
            b'\n' => Newline::Lf,
            b'\r' if bytes.get(pos.saturating_add(1)) == Some(&b'\n') => Newline::CrLf,
            b'\r' => Newline::Cr,
            _ => {
                pos = pos.saturating_add(1);
                continue;
            }
        };
        lines.push((content.get(start..pos).unwrap_or_default(), Some(newline)));
        pos = pos.saturating_add(newline.as_str().len());
        start = pos;
    }

    if start < content.len() {
        lines.push((content.get(start..).unwrap_or_default(), None));
    }

    lines
}

/// Applies `mode` to every line of `content`.
///
/// Kept lines are written back with the file's newline convention (see
/// [`NewlinesSeen::convention`]); every kept line gets a terminator, including
/// a last line that had none. Log entries come out in line order.
#[must_use]
pub fn rewrite_source(path: &Path, content: &str, mode: Mode) -> Rewrite {
    let lines = split_lines(content);

    let mut seen = NewlinesSeen::default();
    for newline in lines.iter().filter_map(|&(_, newline)| newline) {
        seen.record(newline);
    }
    let newline = seen.convention();

    let mut report = FileReport::new(path.to_path_buf());
    report.mixed_newlines = seen.is_mixed();

    let mut contents = String::with_capacity(content.len());
    for &(line, _) in &lines {
        match classify(mode, line) {
            Verdict::Drop => {
                report.entries.push(LogEntry::Removed(line.trim_end().to_owned()));
            }
            Verdict::Keep(kept) => {
                if matches_any(&kept) {
                    report.entries.push(LogEntry::Echo(kept.trim_end().to_owned()));
                }
                contents.push_str(&kept);
                contents.push_str(newline.as_str());
            }
        }
    }

    Rewrite { contents, report }
}

/// Rewrites a single C source file in place.
///
/// # Arguments
///
/// * `path` - The file to rewrite
/// * `mode` - How trace lines are transformed
///
/// # Returns
///
/// * `Ok(FileReport)` - The log entries for the file, in line order
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read as UTF-8 text
/// * The rewritten contents cannot be written back
///
/// The file is truncated and written in one call; a failure during the write
/// can leave it partially written.
#[inline]
pub fn rewrite_file(path: &Path, mode: Mode) -> Result<FileReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;

    let Rewrite { contents, report } = rewrite_source(path, &content, mode);

    fs::write(path, contents)
        .with_context(|| format!("Failed to write source file: {}", path.display()))?;

    Ok(report)
}
