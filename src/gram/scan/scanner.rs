//! The sentence scanner engine
//!
//! Converts input text into an ordered token sequence in one linear
//! left-to-right pass. Two cursors drive the walk: `start` marks the
//! beginning of the current token and `current` is the lookahead position.
//! Each iteration reads one pivot character, greedily consumes the rest of
//! its run, and emits a token spanning `[start, current)`. Runs are maximal:
//! the only token boundaries are class changes. Lookahead inspects only the
//! character immediately after `current` and never backtracks.
//!
//! Cursors and spans count characters, not bytes, so error offsets line up
//! with editor caret positions even when the input contains multi-byte
//! characters (which are themselves unrecognized).

use super::classify::{is_space, is_word_char};
use super::error::{ScanError, ScannerError};
use super::token::Token;

/// Cursor state for a single scan pass
struct Scanner {
    chars: Vec<char>,
    start: usize,
    current: usize,
}

/// One maximal run, or the character that matched no class
enum Run {
    Token(Token),
    Unrecognized { ch: char, offset: usize },
}

impl Scanner {
    fn new(input: &str) -> Self {
        Scanner {
            chars: input.chars().collect(),
            start: 0,
            current: 0,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    /// Greedily extend the current run while the next character matches
    fn take_while(&mut self, pred: fn(char) -> bool) {
        while self.peek().map_or(false, pred) {
            self.current += 1;
        }
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    /// Consume the next maximal run. Returns `None` at end of input.
    fn next_run(&mut self) -> Option<Run> {
        if self.is_at_end() {
            return None;
        }
        self.start = self.current;
        let pivot = self.advance();
        if is_space(pivot) {
            self.take_while(is_space);
            Some(Run::Token(Token::whitespace(self.lexeme())))
        } else if is_word_char(pivot) {
            self.take_while(is_word_char);
            Some(Run::Token(Token::word(self.lexeme())))
        } else {
            Some(Run::Unrecognized {
                ch: pivot,
                offset: self.start,
            })
        }
    }
}

/// Scan input text into a token stream, strict variant.
///
/// Fails on the first unrecognized character, identifying the character and
/// its numeric code. On success the returned sequence ends with exactly one
/// end sentinel, and concatenating the lexemes of all non-sentinel tokens
/// reproduces the input exactly.
pub fn scan(input: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    while let Some(run) = scanner.next_run() {
        match run {
            Run::Token(token) => tokens.push(token),
            Run::Unrecognized { ch, offset } => {
                return Err(ScanError::unrecognized(ch, offset));
            }
        }
    }
    tokens.push(Token::end());
    Ok(tokens)
}

/// Result of the collecting scan variant: a clean token stream, or every
/// lexical error found in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Tokens(Vec<Token>),
    Errors(Vec<ScannerError>),
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, ScanOutcome::Tokens(_))
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            ScanOutcome::Tokens(tokens) => Some(tokens),
            ScanOutcome::Errors(_) => None,
        }
    }

    pub fn errors(&self) -> &[ScannerError] {
        match self {
            ScanOutcome::Tokens(_) => &[],
            ScanOutcome::Errors(errors) => errors,
        }
    }
}

/// Scan input text, collecting lexical errors instead of aborting.
///
/// Each unrecognized character becomes its own one-character error span;
/// consecutive unrecognized characters are reported separately, never
/// merged. The scan always runs to the end of input, so an editor can
/// underline every problem in a single pass. Inputs with no unrecognized
/// characters produce the same token stream as [scan].
pub fn scan_collecting(input: &str) -> ScanOutcome {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    while let Some(run) = scanner.next_run() {
        match run {
            Run::Token(token) => tokens.push(token),
            Run::Unrecognized { ch, offset } => {
                errors.push(ScannerError::unrecognized(ch, offset));
            }
        }
    }
    if errors.is_empty() {
        tokens.push(Token::end());
        ScanOutcome::Tokens(tokens)
    } else {
        ScanOutcome::Errors(errors)
    }
}
