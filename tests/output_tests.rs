use slow_query_detector::{
    diagnostics::SummaryOutcome,
    document::Document,
    output::{
        NO_ISSUES_MESSAGE, OutputFormat, OutputOptions, format_catalog, format_findings,
        format_summary
    },
    rules::{analyze, catalog}
};

fn plain(format: OutputFormat) -> OutputOptions {
    OutputOptions {
        format,
        colored: false,
        verbose: false
    }
}

fn sample_document() -> Document {
    Document::new(
        "queries.sql",
        "sql",
        "SELECT id FROM users\nWHERE name LIKE '%John%'"
    )
}

#[test]
fn test_output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert_eq!(opts.format, OutputFormat::Text);
    assert!(opts.colored);
    assert!(!opts.verbose);
}

#[test]
fn test_text_findings_have_locations() {
    let document = sample_document();
    let findings = analyze(&document.text);
    let output = format_findings(&document, &findings, &plain(OutputFormat::Text));

    assert!(output.contains("queries.sql:2:1: warning:"));
    assert!(output.contains("leading wildcards"));
}

#[test]
fn test_text_clean_document() {
    let document = Document::new("queries.sql", "sql", "SELECT id FROM users WHERE id = 1");
    let output = format_findings(&document, &[], &plain(OutputFormat::Text));

    assert_eq!(output, format!("queries.sql: {}\n", NO_ISSUES_MESSAGE));
}

#[test]
fn test_text_without_color_has_no_ansi_codes() {
    let document = sample_document();
    let findings = analyze(&document.text);
    let output = format_findings(&document, &findings, &plain(OutputFormat::Text));

    assert!(!output.contains('\x1b'));
}

#[test]
fn test_verbose_text_includes_matched_snippet() {
    let document = Document::new("queries.sql", "sql", "SELECT * FROM users");
    let findings = analyze(&document.text);
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: true
    };

    let output = format_findings(&document, &findings, &opts);
    assert!(output.contains("match: SELECT *"));
}

#[test]
fn test_json_findings_round_trip() {
    let document = sample_document();
    let findings = analyze(&document.text);
    let output = format_findings(&document, &findings, &plain(OutputFormat::Json));

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["uri"], "queries.sql");
    assert_eq!(value["findings"][0]["severity"], "warning");
    assert!(value["findings"][0]["span"]["start"].is_u64());
    assert!(value["findings"][0]["span"]["len"].is_u64());
}

#[test]
fn test_yaml_findings() {
    let document = sample_document();
    let findings = analyze(&document.text);
    let output = format_findings(&document, &findings, &plain(OutputFormat::Yaml));

    assert!(output.contains("uri: queries.sql"));
    assert!(output.contains("severity: warning"));
}

#[test]
fn test_summary_no_issues_sentinel() {
    let output = format_summary(&SummaryOutcome::NoIssues, &plain(OutputFormat::Text));
    assert_eq!(output, NO_ISSUES_MESSAGE);
}

#[test]
fn test_summary_bulleted_messages() {
    let outcome = SummaryOutcome::Issues(vec!["first message", "second message"]);
    let output = format_summary(&outcome, &plain(OutputFormat::Text));

    assert_eq!(
        output,
        "Detected potential issues:\n- first message\n- second message"
    );
}

#[test]
fn test_catalog_listing() {
    let output = format_catalog(catalog(), &plain(OutputFormat::Text));

    assert_eq!(output.lines().filter(|l| l.contains("pattern:")).count(), 15);
    assert!(output.contains("DISTINCT"));
    assert!(output.contains("15."));
}
