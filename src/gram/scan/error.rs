//! Error types for the sentence scanner

use super::position::{position_at, Position, Span};
use serde::Serialize;
use std::fmt;

/// Failure raised by the strict scan variant.
///
/// Scanning aborts at the first unrecognized character; no partial token
/// list is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A character outside the recognized classes (ASCII letters, space)
    UnrecognizedCharacter {
        ch: char,
        /// Numeric code point of the character
        code: u32,
        /// Character offset where it was found
        offset: usize,
    },
}

impl ScanError {
    pub fn unrecognized(ch: char, offset: usize) -> Self {
        ScanError::UnrecognizedCharacter {
            ch,
            code: ch as u32,
            offset,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnrecognizedCharacter { ch, code, offset } => {
                write!(
                    f,
                    "unrecognized character {:?} (code {}) at offset {}",
                    ch, code, offset
                )
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// A recorded lexical error from the collecting scan variant.
///
/// `start` and `end` are half-open character offsets into the original
/// input, stable across re-scans, so an editor can highlight the span and
/// move the caret to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannerError {
    pub start: usize,
    pub end: usize,
    pub message: String,
}

impl ScannerError {
    pub fn unrecognized(ch: char, offset: usize) -> Self {
        ScannerError {
            start: offset,
            end: offset + 1,
            message: format!("unrecognized character {:?} (code {})", ch, ch as u32),
        }
    }

    /// The offending character offsets as a span, for editor highlighting
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Line/column of the start of the offending span
    pub fn position(&self, source: &str) -> Position {
        position_at(source, self.start)
    }
}

impl fmt::Display for ScannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {}", self.start, self.end, self.message)
    }
}

impl std::error::Error for ScannerError {}
