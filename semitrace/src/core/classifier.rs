// src/core/classifier.rs
use crate::core::patterns::{comment_out, is_commented, matches_any, matches_init, matches_std_call, uncomment};
use crate::models::{Mode, Verdict};

/// Decides what happens to a single line under `mode`.
///
/// `line` is expected without its terminator. Lines that hold no trace call
/// are always kept unchanged. In the destructive modes the init call is
/// checked first, so a line holding both the init call and a standard call
/// is commented out rather than dropped.
#[inline]
#[must_use]
pub fn classify(mode: Mode, line: &str) -> Verdict {
    let commented = is_commented(line);

    match mode {
        Mode::On => {
            if commented && matches_any(line) {
                return Verdict::Keep(uncomment(line));
            }
        }
        Mode::Off => {
            if !commented && matches_any(line) {
                return Verdict::Keep(comment_out(line));
            }
        }
        Mode::Remove => {
            if !commented {
                if matches_init(line) {
                    return Verdict::Keep(comment_out(line));
                }
                if matches_std_call(line) {
                    return Verdict::Drop;
                }
            }
        }
        Mode::RemoveAll => {
            if !commented && matches_init(line) {
                return Verdict::Keep(comment_out(line));
            }
            if matches_std_call(line) {
                return Verdict::Drop;
            }
        }
    }

    Verdict::Keep(line.to_owned())
}
