// src/models/file_report.rs
use std::fmt;
use std::path::PathBuf;

/// One line of output about a rewritten file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A line left out of the rewritten file.
    Removed(String),
    /// A kept line that still holds a trace call, as written back.
    Echo(String),
}

impl fmt::Display for LogEntry {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(line) => write!(f, "Removed: {line}"),
            Self::Echo(line) => f.write_str(line),
        }
    }
}

#[derive(Debug, Default)]
pub struct FileReport {
    pub path: PathBuf,
    pub entries: Vec<LogEntry>,
    pub mixed_newlines: bool,
}

impl FileReport {
    #[inline]
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Nothing worth printing: no header is shown for this file.
    #[inline]
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.entries.is_empty()
    }
}
