//! Character classification for the sentence scanner
//!
//! The input domain is restricted on purpose: word characters are ASCII
//! letters only (no Unicode letter support), and the only whitespace is the
//! single literal space. Tabs and newlines are unrecognized characters and
//! surface as scan errors.

/// Check if a character belongs to a word run (`A`-`Z` or `a`-`z`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character belongs to a whitespace run (the space character only).
pub fn is_space(c: char) -> bool {
    c == ' '
}
