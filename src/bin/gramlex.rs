//! Command-line interface for gramlex
//! This binary scans sentence files and markdown documentation content into token streams.
//!
//! Usage:
//!   gramlex scan `<path>` [--format `<format>`]  - Scan a file and print its token stream
//!   gramlex check `<path>`                      - Report every unrecognized character
//!   gramlex list-formats                      - List all available output formats

use clap::{Arg, Command};
use gramlex::gram::processor::{process_file, ProcessingSpec};
use gramlex::gram::scan::{position_at, scan_collecting, ScanOutcome};

fn main() {
    let matches = Command::new("gramlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for scanning sentence text and markdown content")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("Scan a file and print its token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to scan")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'markdown-json')")
                        .default_value("token-simple"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report every unrecognized character in a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to check")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Error output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("scan", scan_matches)) => {
            let path = scan_matches.get_one::<String>("path").unwrap();
            let format = scan_matches.get_one::<String>("format").unwrap();
            handle_scan_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let format = check_matches.get_one::<String>("format").unwrap();
            handle_check_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the scan command
fn handle_scan_command(path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the check command
fn handle_check_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match scan_collecting(&source) {
        ScanOutcome::Tokens(tokens) => {
            println!("ok: {} tokens", tokens.len());
        }
        ScanOutcome::Errors(errors) => {
            match format {
                "json" => {
                    let json = serde_json::to_string_pretty(&errors).unwrap_or_else(|e| {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    });
                    println!("{}", json);
                }
                _ => {
                    for error in &errors {
                        let position = position_at(&source, error.start);
                        eprintln!("{}: {}", position, error.message);
                    }
                    eprintln!("{} error(s) found", errors.len());
                }
            }
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in gramlex::gram::processor::available_formats() {
        println!("  {}", format);
    }
}
