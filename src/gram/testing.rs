//! Test support for token streams
//!
//! Shared assertion helpers used by the integration tests. These encode the
//! scanner's structural invariants once, so individual tests state intent
//! instead of re-deriving the checks.

use crate::gram::scan::{Token, TokenKind};

/// Project a token stream onto its kinds
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Assert the stream ends with exactly one sentinel, and nowhere else
pub fn assert_terminated(tokens: &[Token]) {
    assert!(
        matches!(tokens.last(), Some(token) if token.is_end()),
        "token stream must end with the sentinel, got {:?}",
        tokens.last()
    );
    let sentinels = tokens.iter().filter(|t| t.is_end()).count();
    assert_eq!(sentinels, 1, "expected exactly one sentinel token");
}

/// Assert concatenating non-sentinel lexemes reproduces the source
pub fn assert_round_trip(source: &str, tokens: &[Token]) {
    let rebuilt: String = tokens
        .iter()
        .filter(|t| !t.is_end())
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(rebuilt, source, "lexemes must partition the source losslessly");
}

/// Assert no two adjacent word/whitespace tokens share a kind
pub fn assert_maximal(tokens: &[Token]) {
    for window in tokens.windows(2) {
        if window[0].is_end() || window[1].is_end() {
            continue;
        }
        assert_ne!(
            window[0].kind, window[1].kind,
            "adjacent tokens {:?} and {:?} should have merged into one run",
            window[0], window[1]
        );
    }
}
