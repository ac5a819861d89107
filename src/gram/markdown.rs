//! Markdown-to-token pipeline for documentation content
//!
//! Documentation panes render a small inline subset of markdown: strong,
//! emphasis, inline code, links, and line breaks. The pipeline converts a
//! source string into a flat sequence of styled runs; it never fails, because
//! documentation rendering must degrade to plain text rather than error out
//! on malformed markup.

pub mod pipeline;
pub mod tokens;

pub use pipeline::to_tokens;
pub use tokens::{MarkdownKind, MarkdownToken, RawToken};
