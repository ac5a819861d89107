//! Token types for the sentence scanner
//!
//! A scan produces a flat sequence of tokens, each carrying the exact
//! substring it matched. Concatenating the lexemes of all non-sentinel tokens
//! reproduces the input (lossless partition). Every scan result ends with
//! exactly one `End` sentinel whose lexeme is empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A maximal run of ASCII letters
    Word,
    /// A maximal run of space characters
    Whitespace,
    /// The end-of-stream sentinel, appended exactly once per scan
    End,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Whitespace => "whitespace",
            TokenKind::End => "end",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified, contiguous span of input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The exact substring matched
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn word(lexeme: impl Into<String>) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind: TokenKind::Word,
        }
    }

    pub fn whitespace(lexeme: impl Into<String>) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind: TokenKind::Whitespace,
        }
    }

    /// The sentinel token. Its lexeme is always empty.
    pub fn end() -> Self {
        Token {
            lexeme: String::new(),
            kind: TokenKind::End,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "<end>"),
            _ => write!(f, "<{}:{}>", self.kind, self.lexeme),
        }
    }
}
