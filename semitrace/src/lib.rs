// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::classifier::classify;
pub use crate::core::rewriter::{Rewrite, rewrite_file, rewrite_source, split_lines};
pub use crate::core::scanner::{SOURCE_GLOB, SRC_DIR, scan_source_dir, source_files};
pub use models::{FileReport, LogEntry, Mode, Newline, NewlinesSeen, Verdict};
