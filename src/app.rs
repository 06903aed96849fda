//! Application logic for the slow-query-detector CLI.
//!
//! This module contains the command runners separated from the main
//! entry point to enable testing. The CLI is one host of the analysis
//! core: it loads documents, routes them through a
//! [`DiagnosticsStore`], and renders findings.

use std::{
    io::{self, Read},
    path::{Path, PathBuf}
};

use clap::Parser;

use crate::{
    cli::{Cli, Commands, Format},
    config::Config,
    diagnostics::{DiagnosticsStore, SummaryOutcome, summarize_document},
    document::{Document, SQL_LANGUAGE_ID},
    error::{AppResult, file_read_error},
    output::{OutputFormat, OutputOptions, format_catalog, format_findings, format_summary},
    rules::{Finding, Severity, catalog}
};

/// Parse CLI arguments, load configuration, and run the selected
/// command. Returns the process exit code.
pub fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            files,
            language,
            output_format,
            verbose,
            no_color
        } => {
            let opts = resolve_output_options(output_format, no_color, verbose, &config);
            run_check(&files, language.as_deref(), &opts)
        }
        Commands::Summary {
            file,
            no_color
        } => {
            let opts = resolve_output_options(None, no_color, false, &config);
            run_summary(file.as_deref(), &opts)
        }
        Commands::Rules {
            no_color
        } => {
            let opts = resolve_output_options(None, no_color, false, &config);
            print!("{}", format_catalog(catalog(), &opts));
            Ok(0)
        }
    }
}

/// Run detailed-mode analysis over the given files.
///
/// Every document passes through a [`DiagnosticsStore`], so each
/// refresh replaces that document's prior findings wholesale. Non-SQL
/// documents yield no findings.
pub fn run_check(
    files: &[PathBuf],
    language: Option<&str>,
    opts: &OutputOptions
) -> AppResult<i32> {
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        documents.push(read_document(path, language)?);
    }

    let mut store = DiagnosticsStore::new();
    let mut exit_code = 0;

    for document in &documents {
        let findings = store.refresh(document);

        let formatted = format_findings(document, findings, opts);
        if formatted.ends_with('\n') {
            print!("{}", formatted);
        } else {
            println!("{}", formatted);
        }

        exit_code = exit_code.max(calculate_exit_code(findings));
    }

    Ok(exit_code)
}

/// Run summary-mode analysis of a single document.
///
/// `None` reproduces the "no active document" outcome: an error, not
/// an empty report.
pub fn run_summary(file: Option<&Path>, opts: &OutputOptions) -> AppResult<i32> {
    let document = match file {
        Some(path) => Some(read_document(path, None)?),
        None => None
    };

    let outcome = summarize_document(document.as_ref())?;
    println!("{}", format_summary(&outcome, opts));

    Ok(match outcome {
        SummaryOutcome::NoIssues => 0,
        SummaryOutcome::Issues(_) => 1
    })
}

/// Calculates the process exit code from finding severities.
///
/// - `0` - no findings or only informational messages
/// - `1` - at least one warning present
/// - `2` - at least one error present
pub fn calculate_exit_code(findings: &[Finding]) -> i32 {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        2
    } else if findings.iter().any(|f| f.severity == Severity::Warning) {
        1
    } else {
        0
    }
}

/// Read a document from a path or stdin ("-").
///
/// Stdin is assumed to be SQL; files infer their language id from the
/// extension. An explicit language overrides both.
fn read_document(path: &Path, language: Option<&str>) -> AppResult<Document> {
    let mut document = if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Document::new("<stdin>", SQL_LANGUAGE_ID, buffer)
    } else {
        Document::from_path(path)?
    };

    if let Some(language) = language {
        document.language_id = language.into();
    }

    Ok(document)
}

/// Merge CLI flags with configuration into effective output options.
fn resolve_output_options(
    format: Option<Format>,
    no_color: bool,
    verbose: bool,
    config: &Config
) -> OutputOptions {
    let format = format
        .map(convert_format)
        .or_else(|| config.output.format.as_deref().and_then(parse_format))
        .unwrap_or_default();

    OutputOptions {
        format,
        colored: !no_color && config.output.color,
        verbose
    }
}

/// Convert CLI format flag to internal output format
fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Parse format string from configuration
fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        "yaml" | "yml" => Some(OutputFormat::Yaml),
        _ => None
    }
}
