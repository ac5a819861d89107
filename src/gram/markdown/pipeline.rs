//! Conversion from raw markup tokens to styled runs
//!
//! The pipeline walks the raw token stream once, pairing markers into styled
//! runs. Marker pairs never cross a line break, and run content is literal:
//! markup inside a strong/emphasis/code span is not re-parsed. Anything that
//! fails to pair (a dangling `**`, a malformed link) degrades to plain text.

use super::tokens::{MarkdownKind, MarkdownToken, RawToken};
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Accepted link destinations: absolute http(s) URLs, site-relative or
/// file-relative paths, and fragment anchors. No embedded whitespace.
static HREF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://\S+|[./#]\S*)$").unwrap());

/// Tokenize markup source, keeping byte spans
fn tokenize(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }
    tokens
}

/// Convert documentation source into a flat sequence of styled runs.
///
/// Never fails: malformed markup is kept as plain text. Adjacent plain-text
/// runs are merged.
pub fn to_tokens(source: &str) -> Vec<MarkdownToken> {
    let raw = tokenize(source);
    let mut out: Vec<MarkdownToken> = Vec::new();
    let mut i = 0;
    while i < raw.len() {
        let (token, span) = (&raw[i].0, raw[i].1.clone());
        match token {
            RawToken::Text => {
                push_text(&mut out, &source[span.clone()], span);
                i += 1;
            }
            RawToken::Newline => {
                out.push(MarkdownToken {
                    kind: MarkdownKind::Break,
                    text: "\n".to_string(),
                    span,
                });
                i += 1;
            }
            RawToken::StrongMarker => {
                i = emit_paired(&raw, i, MarkdownKind::Strong, source, &mut out);
            }
            RawToken::EmphasisMarker => {
                i = emit_paired(&raw, i, MarkdownKind::Emphasis, source, &mut out);
            }
            RawToken::CodeMarker => {
                i = emit_paired(&raw, i, MarkdownKind::Code, source, &mut out);
            }
            RawToken::OpenBracket => match parse_link(&raw, i, source) {
                Some((run, next)) => {
                    out.push(run);
                    i = next;
                }
                None => {
                    push_text(&mut out, &source[span.clone()], span);
                    i += 1;
                }
            },
            RawToken::CloseBracket | RawToken::OpenParen | RawToken::CloseParen => {
                // Stray link punctuation is just text
                push_text(&mut out, &source[span.clone()], span);
                i += 1;
            }
        }
    }
    out
}

/// Find the closing occurrence of `marker` before the next line break
fn find_close(raw: &[(RawToken, Range<usize>)], from: usize, marker: &RawToken) -> Option<usize> {
    for (j, (token, _)) in raw.iter().enumerate().skip(from) {
        if token == marker {
            return Some(j);
        }
        if matches!(token, RawToken::Newline) {
            return None;
        }
    }
    None
}

/// Emit a styled run for a marker pair, or degrade the opening marker to
/// text. Returns the index to resume from.
fn emit_paired(
    raw: &[(RawToken, Range<usize>)],
    open: usize,
    kind: MarkdownKind,
    source: &str,
    out: &mut Vec<MarkdownToken>,
) -> usize {
    let open_span = raw[open].1.clone();
    match find_close(raw, open + 1, &raw[open].0) {
        // Reject empty spans ("****" is not an empty strong run)
        Some(close) if raw[close].1.start > open_span.end => {
            let close_span = raw[close].1.clone();
            out.push(MarkdownToken {
                kind,
                text: source[open_span.end..close_span.start].to_string(),
                span: open_span.start..close_span.end,
            });
            close + 1
        }
        _ => {
            push_text(out, &source[open_span.clone()], open_span);
            open + 1
        }
    }
}

/// Try to parse `[label](destination)` starting at the opening bracket.
///
/// The label and destination must be single text runs, and the destination
/// must look like a link target; otherwise the bracket degrades to text.
fn parse_link(
    raw: &[(RawToken, Range<usize>)],
    open: usize,
    source: &str,
) -> Option<(MarkdownToken, usize)> {
    let label = match raw.get(open + 1) {
        Some((RawToken::Text, span)) => &source[span.clone()],
        _ => return None,
    };
    match raw.get(open + 2) {
        Some((RawToken::CloseBracket, _)) => {}
        _ => return None,
    }
    match raw.get(open + 3) {
        Some((RawToken::OpenParen, _)) => {}
        _ => return None,
    }
    let href = match raw.get(open + 4) {
        Some((RawToken::Text, span)) => &source[span.clone()],
        _ => return None,
    };
    let close_span = match raw.get(open + 5) {
        Some((RawToken::CloseParen, span)) => span.clone(),
        _ => return None,
    };
    if !HREF_RE.is_match(href) {
        return None;
    }
    let open_span = raw[open].1.clone();
    Some((
        MarkdownToken {
            kind: MarkdownKind::Link {
                href: href.to_string(),
            },
            text: label.to_string(),
            span: open_span.start..close_span.end,
        },
        open + 6,
    ))
}

/// Append plain text, merging with an adjacent preceding text run
fn push_text(out: &mut Vec<MarkdownToken>, text: &str, span: Range<usize>) {
    if let Some(last) = out.last_mut() {
        if matches!(last.kind, MarkdownKind::Text) && last.span.end == span.start {
            last.text.push_str(text);
            last.span.end = span.end;
            return;
        }
    }
    out.push(MarkdownToken {
        kind: MarkdownKind::Text,
        text: text.to_string(),
        span,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: MarkdownKind, text: &str, span: Range<usize>) -> MarkdownToken {
        MarkdownToken {
            kind,
            text: text.to_string(),
            span,
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            to_tokens("hello there"),
            vec![run(MarkdownKind::Text, "hello there", 0..11)]
        );
    }

    #[test]
    fn test_strong_run() {
        assert_eq!(
            to_tokens("**bold**"),
            vec![run(MarkdownKind::Strong, "bold", 0..8)]
        );
    }

    #[test]
    fn test_emphasis_and_code() {
        assert_eq!(
            to_tokens("*it* `x`"),
            vec![
                run(MarkdownKind::Emphasis, "it", 0..4),
                run(MarkdownKind::Text, " ", 4..5),
                run(MarkdownKind::Code, "x", 5..8),
            ]
        );
    }

    #[test]
    fn test_dangling_marker_degrades_to_text() {
        assert_eq!(
            to_tokens("a ** b"),
            vec![run(MarkdownKind::Text, "a ** b", 0..6)]
        );
    }

    #[test]
    fn test_marker_pairs_do_not_cross_line_breaks() {
        let runs = to_tokens("**a\nb**");
        assert_eq!(
            runs,
            vec![
                run(MarkdownKind::Text, "**a", 0..3),
                run(MarkdownKind::Break, "\n", 3..4),
                run(MarkdownKind::Text, "b**", 4..7),
            ]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            to_tokens("[docs](https://example.com)"),
            vec![run(
                MarkdownKind::Link {
                    href: "https://example.com".to_string()
                },
                "docs",
                0..27
            )]
        );
    }

    #[test]
    fn test_relative_and_anchor_links() {
        assert!(matches!(
            to_tokens("[a](./guide)").first().map(|r| &r.kind),
            Some(MarkdownKind::Link { .. })
        ));
        assert!(matches!(
            to_tokens("[a](#section)").first().map(|r| &r.kind),
            Some(MarkdownKind::Link { .. })
        ));
    }

    #[test]
    fn test_bad_link_destination_degrades_to_text() {
        let runs = to_tokens("[x](not a url)");
        assert!(runs.iter().all(|r| !matches!(r.kind, MarkdownKind::Link { .. })));
        let rebuilt: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(rebuilt, "[x](not a url)");
    }

    #[test]
    fn test_inner_markup_is_literal() {
        assert_eq!(
            to_tokens("**a*b**"),
            vec![run(MarkdownKind::Strong, "a*b", 0..7)]
        );
    }

    #[test]
    fn test_empty_pair_degrades() {
        let runs = to_tokens("****");
        assert!(runs.iter().all(|r| matches!(r.kind, MarkdownKind::Text)));
    }

    #[test]
    fn test_never_fails_on_marker_soup() {
        let runs = to_tokens("]({[`** \n )*`");
        assert!(!runs.is_empty());
    }
}
