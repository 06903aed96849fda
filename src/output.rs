use colored::Colorize;
use serde::Serialize;

use crate::{
    diagnostics::SummaryOutcome,
    document::{Document, position_at},
    rules::{Finding, Rule}
};

/// Message shown whenever a scan comes back clean.
pub const NO_ISSUES_MESSAGE: &str = "No slow query patterns detected.";

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Findings of one document, for serialization
#[derive(Debug, Serialize)]
pub struct DocumentReport<'a> {
    pub uri:      &'a str,
    pub findings: &'a [Finding]
}

/// Format one document's findings based on output options
pub fn format_findings(document: &Document, findings: &[Finding], opts: &OutputOptions) -> String {
    let report = DocumentReport {
        uri: document.uri.as_str(),
        findings
    };

    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&report).unwrap_or_default(),
        OutputFormat::Text => format_text_findings(document, findings, opts)
    }
}

fn format_text_findings(document: &Document, findings: &[Finding], opts: &OutputOptions) -> String {
    if findings.is_empty() {
        let line = format!("{}: {}", document.uri, NO_ISSUES_MESSAGE);
        return if opts.colored {
            format!("{}\n", line.green())
        } else {
            format!("{}\n", line)
        };
    }

    let mut output = String::new();

    for finding in findings {
        let pos = position_at(&document.text, finding.span.start);
        let severity = if opts.colored {
            finding.severity.to_string().yellow().bold().to_string()
        } else {
            finding.severity.to_string()
        };

        output.push_str(&format!(
            "{}:{}:{}: {}: {}\n",
            document.uri, pos.line, pos.column, severity, finding.message
        ));

        if opts.verbose {
            let matched = &document.text[finding.span.start..finding.span.end()];
            let snippet: String = matched.chars().take(60).collect();
            output.push_str(&format!("  match: {}\n", snippet.replace('\n', " ")));
        }
    }

    output
}

/// Format an on-demand summary outcome.
///
/// Issues are rendered as a single aggregate notification with one
/// `- ` bullet per rule message; a clean scan yields the distinct
/// no-issues sentence.
pub fn format_summary(outcome: &SummaryOutcome, opts: &OutputOptions) -> String {
    match outcome {
        SummaryOutcome::NoIssues => {
            if opts.colored {
                NO_ISSUES_MESSAGE.green().to_string()
            } else {
                NO_ISSUES_MESSAGE.to_string()
            }
        }
        SummaryOutcome::Issues(messages) => {
            let header = if opts.colored {
                "Detected potential issues:".yellow().bold().to_string()
            } else {
                "Detected potential issues:".to_string()
            };
            format!("{}\n- {}", header, messages.join("\n- "))
        }
    }
}

/// Format the rule catalog listing
pub fn format_catalog(rules: &[Rule], opts: &OutputOptions) -> String {
    let mut output = String::new();

    for (i, rule) in rules.iter().enumerate() {
        let number = format!("{:2}.", i + 1);
        if opts.colored {
            output.push_str(&format!("{} {}\n", number.cyan().bold(), rule.message));
        } else {
            output.push_str(&format!("{} {}\n", number, rule.message));
        }
        output.push_str(&format!("    pattern: {}\n", rule.pattern.as_str()));
    }

    output
}
