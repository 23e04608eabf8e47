// src/models/newline.rs

/// A line terminator as found in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl Newline {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Terminators observed while reading one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewlinesSeen {
    lf: bool,
    crlf: bool,
    cr: bool,
}

impl NewlinesSeen {
    #[inline]
    pub const fn record(&mut self, newline: Newline) {
        match newline {
            Newline::Lf => self.lf = true,
            Newline::CrLf => self.crlf = true,
            Newline::Cr => self.cr = true,
        }
    }

    /// More than one kind of terminator in the same file.
    #[inline]
    #[must_use]
    pub const fn is_mixed(self) -> bool {
        let kinds = self.lf as u8 + self.crlf as u8 + self.cr as u8;
        kinds > 1
    }

    /// The terminator to write the file back with.
    ///
    /// Falls back to `\n` when the file had no terminator at all or mixed several.
    #[inline]
    #[must_use]
    pub const fn convention(self) -> Newline {
        if self.is_mixed() {
            return Newline::Lf;
        }
        if self.crlf {
            Newline::CrLf
        } else if self.cr {
            Newline::Cr
        } else {
            Newline::Lf
        }
    }
}
