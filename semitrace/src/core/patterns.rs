// src/core/patterns.rs
//! Line-local regexes for trace statements.
//!
//! Matching is purely textual: a token inside a `/* */` block or a string
//! literal counts the same as a real call.
use regex::Regex;
use std::sync::LazyLock;

/// Monitor (semihosting) initialisation call.
pub const INIT_CALL: &str = r"\binitialise_monitor_handles\b";

/// Standard I/O calls treated as trace noise.
pub const STD_CALLS: &str = concat!(
    r"\bprintf\b",
    r"|\bscanf\b",
    r"|\bsprintf\b",
    r"|\bfopen\b",
    r"|\bfwrite\b",
    r"|\bfclose\b",
);

/// Single-line comment marker.
pub const MARKER: &str = "//";

static INIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INIT_CALL).expect("init call pattern is valid"));

static STD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STD_CALLS).expect("standard call pattern is valid"));

static ANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{INIT_CALL}|{STD_CALLS}")).expect("combined pattern is valid")
});

static COMMENTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//").expect("comment prefix pattern is valid"));

#[inline]
#[must_use]
pub fn matches_init(line: &str) -> bool {
    INIT_RE.is_match(line)
}

#[inline]
#[must_use]
pub fn matches_std_call(line: &str) -> bool {
    STD_RE.is_match(line)
}

/// Init call or any standard call: a line of interest.
#[inline]
#[must_use]
pub fn matches_any(line: &str) -> bool {
    ANY_RE.is_match(line)
}

/// First non-whitespace content is `//`.
#[inline]
#[must_use]
pub fn is_commented(line: &str) -> bool {
    COMMENTED_RE.is_match(line)
}

/// Prepends the marker at column 0.
#[inline]
#[must_use]
pub fn comment_out(line: &str) -> String {
    format!("{MARKER}{line}")
}

/// Removes the leading marker, keeping any indentation in front of it.
///
/// Only the first marker goes, so `////printf` becomes `//printf`.
/// Lines that are not commented come back unchanged.
#[inline]
#[must_use]
pub fn uncomment(line: &str) -> String {
    COMMENTED_RE.find(line).map_or_else(
        || line.to_owned(),
        |prefix| {
            let marker_start = prefix.end().saturating_sub(MARKER.len());
            let mut out = String::with_capacity(line.len());
            out.push_str(line.get(..marker_start).unwrap_or_default());
            out.push_str(line.get(prefix.end()..).unwrap_or_default());
            out
        },
    )
}
