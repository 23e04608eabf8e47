// src/models/verdict.rs

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Write this text back in place of the original line.
    Keep(String),
    /// Leave the line out of the rewritten file.
    Drop,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_drop(&self) -> bool {
        matches!(self, Self::Drop)
    }
}
