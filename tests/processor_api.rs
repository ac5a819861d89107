//! Unit tests for the processor API

use gramlex::gram::processor::{
    available_formats, process, process_file, OutputFormat, ProcessingError, ProcessingSpec,
    ProcessingStage,
};
use rstest::rstest;

#[rstest]
#[case("token-simple", ProcessingStage::Token, OutputFormat::Simple)]
#[case("token-json", ProcessingStage::Token, OutputFormat::Json)]
#[case("token-yaml", ProcessingStage::Token, OutputFormat::Yaml)]
#[case("markdown-simple", ProcessingStage::Markdown, OutputFormat::Simple)]
#[case("markdown-json", ProcessingStage::Markdown, OutputFormat::Json)]
fn parses_valid_format_strings(
    #[case] input: &str,
    #[case] stage: ProcessingStage,
    #[case] format: OutputFormat,
) {
    let spec = ProcessingSpec::from_string(input).unwrap();
    assert_eq!(spec.stage, stage);
    assert_eq!(spec.format, format);
}

#[rstest]
#[case("invalid")]
#[case("token-invalid")]
#[case("invalid-simple")]
#[case("markdown-yaml")]
fn rejects_invalid_format_strings(#[case] input: &str) {
    assert!(ProcessingSpec::from_string(input).is_err());
}

#[test]
fn lists_every_available_format() {
    let formats = available_formats();
    assert_eq!(formats.len(), 5);
    for format in &formats {
        assert!(ProcessingSpec::from_string(format).is_ok());
    }
}

#[test]
fn token_simple_output() {
    let spec = ProcessingSpec::from_string("token-simple").unwrap();
    let output = process("hi there", &spec).unwrap();
    insta::assert_snapshot!(output, @r"
    <word:hi>
    <whitespace: >
    <word:there>
    <end>
    ");
}

#[test]
fn token_json_output() {
    let spec = ProcessingSpec::from_string("token-json").unwrap();
    let output = process("hi", &spec).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"lexeme": "hi", "kind": "word"},
            {"lexeme": "", "kind": "end"},
        ])
    );
}

#[test]
fn token_yaml_output() {
    let spec = ProcessingSpec::from_string("token-yaml").unwrap();
    let output = process("hi", &spec).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(value[0]["lexeme"], serde_yaml::Value::from("hi"));
    assert_eq!(value[1]["kind"], serde_yaml::Value::from("end"));
}

#[test]
fn markdown_simple_output() {
    let spec = ProcessingSpec::from_string("markdown-simple").unwrap();
    let output = process("see **the** [docs](https://example.com)", &spec).unwrap();
    insta::assert_snapshot!(output, @r"
    <text:see >
    <strong:the>
    <text: >
    <link:docs:https://example.com>
    ");
}

#[test]
fn token_stage_surfaces_scan_failures() {
    let spec = ProcessingSpec::from_string("token-simple").unwrap();
    let err = process("a1b", &spec).unwrap_err();
    assert!(matches!(err, ProcessingError::Scan(_)));
    assert!(err.to_string().contains("'1'"));
}

#[test]
fn missing_file_is_an_io_error() {
    let spec = ProcessingSpec::from_string("token-simple").unwrap();
    let err = process_file("no/such/file.txt", &spec).unwrap_err();
    assert!(matches!(err, ProcessingError::IoError(_)));
}
