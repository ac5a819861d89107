//! Processing API for sentence and markdown sources
//!
//! This module provides an extensible API for processing input with
//! different stages (token, markdown) and output formats (simple, json,
//! yaml). Format strings combine the two, e.g. `token-simple` or
//! `markdown-json`.

use crate::gram::markdown::{to_tokens, MarkdownToken};
use crate::gram::scan::{scan, ScanError, Token};
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Token,
    Markdown,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "markdown-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "token" => ProcessingStage::Token,
            "markdown" => ProcessingStage::Markdown,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1..].join("-"))),
        };

        // Validate stage/format compatibility
        if stage == ProcessingStage::Markdown && format == OutputFormat::Yaml {
            return Err(ProcessingError::InvalidFormatType(
                "yaml output is only supported for the token stage".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Markdown,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Markdown,
                format: OutputFormat::Json,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Scan(ScanError),
    IoError(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::Scan(err) => write!(f, "Scan failed: {}", err),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<ScanError> for ProcessingError {
    fn from(err: ScanError) -> Self {
        ProcessingError::Scan(err)
    }
}

/// Process source text according to the given specification
pub fn process(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = scan(source)?;
            format_tokens(&tokens, &spec.format)
        }
        ProcessingStage::Markdown => {
            let runs = to_tokens(source);
            format_markdown(&runs, &spec.format)
        }
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process(&content, spec)
}

/// Format scanner tokens according to the specified format
fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(tokens).map_err(|e| ProcessingError::IoError(e.to_string()))
        }
    }
}

/// Format markdown runs according to the specified format
fn format_markdown(
    runs: &[MarkdownToken],
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(runs
            .iter()
            .map(|run| run.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(runs)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
        OutputFormat::Yaml => Err(ProcessingError::InvalidFormatType(
            "yaml output is only supported for the token stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Token => "token",
                    ProcessingStage::Markdown => "markdown",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::Yaml => "yaml",
                }
            )
        })
        .collect()
}
