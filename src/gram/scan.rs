//! Sentence scanning: character classification, the scanner engine, and the token model
//!
//! The scanner works over a deliberately restricted input domain: ASCII letters
//! and single spaces. Everything else is an unrecognized character. The strict
//! entry point ([scan](scanner::scan)) aborts on the first unrecognized
//! character; the collecting entry point ([scan_collecting](scanner::scan_collecting))
//! records every offending span so an editor can underline all of them at once.

pub mod classify;
pub mod error;
pub mod position;
pub mod scanner;
pub mod token;

pub use error::{ScanError, ScannerError};
pub use position::{position_at, Position, Span};
pub use scanner::{scan, scan_collecting, ScanOutcome};
pub use token::{Token, TokenKind};
