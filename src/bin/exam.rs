//! Command-line interface for exam
//! This binary parses LaTeX exam documents and prints their topic tree in different formats.
//!
//! Usage:
//!   exam parse `<path>` [--format `<format>`] [--config `<file>`]  - Parse a document ('-' reads stdin)
//!   exam list-formats                                           - List all available formats
//!
//! Set `EXAM_LOG` (e.g. `EXAM_LOG=debug`) to get parser logs on stderr.

use clap::{Arg, Command};
use exam::exam::config::{ExamConfig, Loader};
use exam::exam::formats::FormatRegistry;
use exam::exam::loader::DocumentLoader;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("exam")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting LaTeX exam documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a document and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the .tex file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json'); defaults to output.format"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(matches.get_one::<String>("config"));

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches
                .get_one::<String>("path")
                .expect("path is required");
            let format = parse_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone());
            handle_parse_command(&config, path, &format);
        }
        Some(("list-formats", _)) => handle_list_formats_command(&config),
        _ => unreachable!(),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("EXAM_LOG"))
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&String>) -> ExamConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(config: &ExamConfig, path: &str, format: &str) {
    let registry = FormatRegistry::from_config(config);
    if !registry.has(format) {
        eprintln!("Error: Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        process::exit(1);
    }

    let loader = if path == "-" {
        Ok(DocumentLoader::from_reader(io::BufReader::new(io::stdin())))
    } else {
        DocumentLoader::from_path(path)
    };
    let doc = loader.and_then(DocumentLoader::parse).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    tracing::info!(path, questions = doc.question_count(), "parsed document");

    let output = registry.serialize(&doc, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &ExamConfig) {
    let registry = FormatRegistry::from_config(config);
    println!("Available formats:\n");

    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}", name);
        println!("    {}", description);
    }
}
