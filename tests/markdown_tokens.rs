//! Integration tests for the markdown-to-token pipeline

use gramlex::gram::markdown::{to_tokens, MarkdownKind};

/// Helper: project runs onto their kind names
fn kind_names(source: &str) -> Vec<String> {
    to_tokens(source)
        .iter()
        .map(|run| run.kind.to_string())
        .collect()
}

#[test]
fn renders_a_documentation_paragraph() {
    let source = "The *subject* of a sentence is **always** a noun.\nSee [the guide](./guide).";
    assert_eq!(
        kind_names(source),
        vec![
            "text", "emphasis", "text", "strong", "text", "break", "text", "link", "text",
        ]
    );
}

#[test]
fn link_runs_carry_their_destination() {
    let runs = to_tokens("[overview](#overview)");
    assert_eq!(runs.len(), 1);
    match &runs[0].kind {
        MarkdownKind::Link { href } => assert_eq!(href, "#overview"),
        other => panic!("expected a link, got {:?}", other),
    }
    assert_eq!(runs[0].text, "overview");
}

#[test]
fn code_runs_keep_markup_literal() {
    let runs = to_tokens("type `**bold**` literally");
    assert_eq!(
        kind_names("type `**bold**` literally"),
        vec!["text", "code", "text"]
    );
    assert_eq!(runs[1].text, "**bold**");
}

#[test]
fn malformed_markup_degrades_to_text() {
    for source in ["**dangling", "[label](no destination here)", "a ] b ( c"] {
        let runs = to_tokens(source);
        assert!(
            runs.iter()
                .all(|run| matches!(run.kind, MarkdownKind::Text | MarkdownKind::Break)),
            "expected plain text for {:?}, got {:?}",
            source,
            runs
        );
        let rebuilt: String = runs.iter().map(|run| run.text.as_str()).collect();
        assert_eq!(rebuilt, source);
    }
}

#[test]
fn spans_cover_the_full_markup() {
    let source = "a **b** c";
    let runs = to_tokens(source);
    assert_eq!(runs[1].span, 2..7);
    assert_eq!(&source[runs[1].span.clone()], "**b**");
}

#[test]
fn blank_source_yields_no_runs() {
    assert!(to_tokens("").is_empty());
}
