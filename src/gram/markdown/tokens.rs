//! Token definitions for the markdown pipeline
//!
//! The raw tokens are produced by the logos lexer and cover the inline
//! markup subset used in documentation content: marker characters plus a
//! text catch-all. The styled [MarkdownToken] runs are what consumers
//! actually render; they are produced from the raw stream by
//! [pipeline](super::pipeline).

use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Raw markup tokens as seen by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    // Marker pairs; "**" outranks "*" by token length
    #[token("**")]
    StrongMarker,
    #[token("*")]
    EmphasisMarker,
    #[token("`")]
    CodeMarker,

    // Link punctuation: [label](destination)
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    #[token("\n")]
    Newline,

    // Text content (catch-all for non-marker characters)
    #[regex(r"[^*`\[\]()\n]+")]
    Text,
}

/// The style of a rendered run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownKind {
    /// Plain text
    Text,
    /// `**text**`
    Strong,
    /// `*text*`
    Emphasis,
    /// `` `text` `` (literal, no nested markup)
    Code,
    /// `[label](destination)`
    Link { href: String },
    /// A line break
    Break,
}

impl fmt::Display for MarkdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkdownKind::Text => "text",
            MarkdownKind::Strong => "strong",
            MarkdownKind::Emphasis => "emphasis",
            MarkdownKind::Code => "code",
            MarkdownKind::Link { .. } => "link",
            MarkdownKind::Break => "break",
        };
        write!(f, "{}", name)
    }
}

/// A styled run of documentation text
///
/// `span` covers the full markup in the source, markers included; `text` is
/// the content to render (the link label for links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownToken {
    pub kind: MarkdownKind,
    pub text: String,
    pub span: Range<usize>,
}

impl fmt::Display for MarkdownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MarkdownKind::Break => write!(f, "<break>"),
            MarkdownKind::Link { href } => write!(f, "<link:{}:{}>", self.text, href),
            kind => write!(f, "<{}:{}>", kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn raw(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source)
            .filter_map(|result| result.ok())
            .collect()
    }

    #[test]
    fn test_plain_text_is_one_token() {
        assert_eq!(raw("hello, world."), vec![RawToken::Text]);
    }

    #[test]
    fn test_double_star_beats_single_star() {
        assert_eq!(
            raw("**a*"),
            vec![RawToken::StrongMarker, RawToken::Text, RawToken::EmphasisMarker]
        );
    }

    #[test]
    fn test_link_punctuation() {
        assert_eq!(
            raw("[a](b)"),
            vec![
                RawToken::OpenBracket,
                RawToken::Text,
                RawToken::CloseBracket,
                RawToken::OpenParen,
                RawToken::Text,
                RawToken::CloseParen,
            ]
        );
    }

    #[test]
    fn test_display_forms() {
        let run = MarkdownToken {
            kind: MarkdownKind::Strong,
            text: "bold".to_string(),
            span: 0..8,
        };
        assert_eq!(format!("{}", run), "<strong:bold>");

        let link = MarkdownToken {
            kind: MarkdownKind::Link {
                href: "https://example.com".to_string(),
            },
            text: "docs".to_string(),
            span: 0..27,
        };
        assert_eq!(format!("{}", link), "<link:docs:https://example.com>");
    }
}
