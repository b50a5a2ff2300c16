//! Line/column positions for diagnostics
//!
//! Tokens carry byte spans; positions are only computed when an error is
//! reported, by scanning the source up to the offending offset.

use std::fmt;

/// A 1-based line/column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Compute the position of a byte offset within `source`.
    ///
    /// Offsets past the end of the source resolve to the position just after
    /// the last character, so end-of-input errors still point somewhere sane.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (index, ch) in source.char_indices() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
