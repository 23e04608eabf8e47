// src/models.rs
mod file_report;
mod mode;
mod newline;
mod verdict;

pub use file_report::{FileReport, LogEntry};
pub use mode::Mode;
pub use newline::{Newline, NewlinesSeen};
pub use verdict::Verdict;
