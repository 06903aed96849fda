//! Host-integration layer: per-document diagnostics and on-demand
//! summaries.
//!
//! The rule engine is a pure function; everything stateful lives here,
//! owned by the host. A [`DiagnosticsStore`] maps each document
//! identity to its most recent findings and is replaced wholesale on
//! every refresh - there is no incremental diffing, a re-analysis of a
//! document discards whatever was reported for it before.
//!
//! Three host-visible outcomes are kept distinct on the on-demand path:
//! issues found, no issues found, and no active document (an error,
//! never an empty result).

use compact_str::CompactString;
use indexmap::IndexMap;

use crate::{
    document::Document,
    error::{AppResult, no_active_document_error},
    rules::{Finding, analyze, summarize}
};

/// Per-document findings, keyed by document identity.
///
/// The store is an explicit value owned by the host-integration layer;
/// the analysis core neither sees nor mutates it. Iteration order is
/// insertion order, so hosts that walk the store report documents in
/// the order they first saw them.
#[derive(Debug, Default)]
pub struct DiagnosticsStore {
    findings: IndexMap<CompactString, Vec<Finding>>
}

impl DiagnosticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-analyze a document and replace its stored findings.
    ///
    /// Runs the full catalog over the document's current text and
    /// stores the result under the document's URI, discarding any
    /// previous findings for that URI. Documents whose declared
    /// content type is not SQL short-circuit to an empty finding list
    /// without running the catalog.
    pub fn refresh(&mut self, document: &Document) -> &[Finding] {
        let findings = if document.is_sql() {
            analyze(&document.text)
        } else {
            Vec::new()
        };

        self.findings.insert(document.uri.clone(), findings);
        self.findings
            .get(document.uri.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Findings most recently stored for a document, empty if the
    /// document was never refreshed.
    pub fn get(&self, uri: &str) -> &[Finding] {
        self.findings
            .get(uri)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Drop a closed document's findings.
    pub fn remove(&mut self, uri: &str) {
        self.findings.shift_remove(uri);
    }

    /// Number of documents with stored findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Iterate stored documents and their findings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.findings
            .iter()
            .map(|(uri, findings)| (uri.as_str(), findings.as_slice()))
    }
}

/// Result of an on-demand whole-document summary.
///
/// "No issues" is a distinct outcome, not an absent response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The catalog found nothing
    NoIssues,
    /// Messages of the rules that matched, in catalog order
    Issues(Vec<&'static str>)
}

/// Summarize the currently active document.
///
/// `None` means the host has no active document at invocation time;
/// that is surfaced as an error, never conflated with a clean result.
/// Summary mode runs regardless of the document's content type - an
/// explicit user request analyzes whatever is in front of them.
pub fn summarize_document(active: Option<&Document>) -> AppResult<SummaryOutcome> {
    let document = active.ok_or_else(no_active_document_error)?;

    let messages = summarize(&document.text);
    if messages.is_empty() {
        Ok(SummaryOutcome::NoIssues)
    } else {
        Ok(SummaryOutcome::Issues(messages))
    }
}
