use slow_query_detector::{
    diagnostics::{DiagnosticsStore, SummaryOutcome, summarize_document},
    document::Document
};

fn sql_document(uri: &str, text: &str) -> Document {
    Document::new(uri, "sql", text)
}

#[test]
fn test_refresh_reports_findings() {
    let mut store = DiagnosticsStore::new();
    let document = sql_document("queries.sql", "SELECT * FROM users");

    let findings = store.refresh(&document);
    assert_eq!(findings.len(), 1);
    assert_eq!(store.get("queries.sql").len(), 1);
}

#[test]
fn test_refresh_replaces_findings_wholesale() {
    let mut store = DiagnosticsStore::new();

    store.refresh(&sql_document("queries.sql", "SELECT * FROM users"));
    assert_eq!(store.get("queries.sql").len(), 1);

    // an edit fixing the query must not accumulate with prior findings
    store.refresh(&sql_document("queries.sql", "SELECT id FROM users WHERE id = 1"));
    assert!(store.get("queries.sql").is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_non_sql_document_short_circuits() {
    let mut store = DiagnosticsStore::new();
    let document = Document::new("notes.md", "markdown", "SELECT * FROM users");

    let findings = store.refresh(&document);
    assert!(findings.is_empty());
}

#[test]
fn test_language_change_clears_prior_findings() {
    let mut store = DiagnosticsStore::new();

    store.refresh(&sql_document("scratch", "SELECT * FROM users"));
    assert_eq!(store.get("scratch").len(), 1);

    store.refresh(&Document::new("scratch", "plaintext", "SELECT * FROM users"));
    assert!(store.get("scratch").is_empty());
}

#[test]
fn test_documents_are_independent() {
    let mut store = DiagnosticsStore::new();

    store.refresh(&sql_document("a.sql", "SELECT * FROM users"));
    store.refresh(&sql_document("b.sql", "SELECT id FROM users WHERE id = 1"));

    assert_eq!(store.get("a.sql").len(), 1);
    assert!(store.get("b.sql").is_empty());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_unknown_document_has_no_findings() {
    let store = DiagnosticsStore::new();
    assert!(store.get("never-seen.sql").is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_remove_drops_document() {
    let mut store = DiagnosticsStore::new();

    store.refresh(&sql_document("a.sql", "SELECT * FROM users"));
    store.remove("a.sql");

    assert!(store.get("a.sql").is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_iter_in_insertion_order() {
    let mut store = DiagnosticsStore::new();

    store.refresh(&sql_document("b.sql", "SELECT * FROM users"));
    store.refresh(&sql_document("a.sql", "SELECT id FROM users WHERE id = 1"));

    let uris: Vec<&str> = store.iter().map(|(uri, _)| uri).collect();
    assert_eq!(uris, vec!["b.sql", "a.sql"]);
}

#[test]
fn test_summary_without_active_document_is_error() {
    let result = summarize_document(None);
    assert!(result.is_err());
}

#[test]
fn test_summary_no_issues_is_distinct_outcome() {
    let document = sql_document("queries.sql", "SELECT id FROM users WHERE id = 1");
    let outcome = summarize_document(Some(&document)).unwrap();
    assert_eq!(outcome, SummaryOutcome::NoIssues);
}

#[test]
fn test_summary_reports_issues() {
    let document = sql_document("queries.sql", "SELECT * FROM users");
    let outcome = summarize_document(Some(&document)).unwrap();

    match outcome {
        SummaryOutcome::Issues(messages) => {
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains("SELECT *"));
        }
        SummaryOutcome::NoIssues => panic!("expected issues")
    }
}

#[test]
fn test_summary_ignores_content_type() {
    // an explicit request summarizes whatever document is active
    let document = Document::new("notes.md", "markdown", "SELECT * FROM users");
    let outcome = summarize_document(Some(&document)).unwrap();
    assert!(matches!(outcome, SummaryOutcome::Issues(_)));
}
