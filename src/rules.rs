//! Pattern-matching rule catalog for slow SQL queries.
//!
//! This module holds a fixed, ordered catalog of regular-expression
//! checks for query anti-patterns and evaluates them against raw SQL
//! text. There is no parsing and no AST: the scan is purely lexical,
//! which keeps it fast and dependency-light but means it cannot tell
//! keywords inside string literals or comments from real ones.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌─────────────┐     ┌────────────┐
//! │  SQL text │────▶│   Catalog   │────▶│  Findings  │
//! └───────────┘     │  (15 rules) │     └────────────┘
//!                   └─────────────┘
//! ```
//!
//! Two evaluation modes share the single catalog:
//!
//! - [`analyze`] - every non-overlapping match of every rule, with byte
//!   spans, for per-occurrence diagnostics.
//! - [`summarize`] - at most one message per rule, for a single
//!   aggregate notification.
//!
//! Both modes apply identical patterns and messages; they differ only in
//! how matches are aggregated.
//!
//! # Ordering
//!
//! Findings are grouped by rule in catalog order; within a rule, matches
//! appear in left-to-right text order. Rules are independent of one
//! another.
//!
//! # Performance caution
//!
//! Several patterns bridge keywords with unbounded `.*` gaps (for
//! example `ORDER BY ... LIMIT`). A single match can therefore span
//! nearly the entire document, and every analysis walks the full text
//! once per rule, so pathological multi-megabyte inputs scan slowly.
//! This is a known, documented property of the heuristic scan; no
//! timeout is imposed.

mod catalog;
mod types;

pub use catalog::rules as catalog;
pub use types::{Finding, Rule, Severity, Span};

/// Detailed mode: report every match of every catalog rule.
///
/// For each rule in catalog order, finds all non-overlapping matches
/// across the full text and emits one [`Finding`] per match. Text with
/// no matches yields an empty vector, never an error.
///
/// Pure function of the input text and the static catalog.
///
/// # Example
///
/// ```
/// use slow_query_detector::rules::analyze;
///
/// let findings = analyze("SELECT * FROM users");
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].span.start, 0);
///
/// assert!(analyze("SELECT id FROM users WHERE id = 1").is_empty());
/// ```
pub fn analyze(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for rule in catalog() {
        for m in rule.pattern.find_iter(text) {
            findings.push(Finding {
                message:  rule.message.to_string(),
                span:     Span {
                    start: m.start(),
                    len:   m.len()
                },
                severity: Severity::Warning
            });
        }
    }

    findings
}

/// Summary mode: report at most one message per catalog rule.
///
/// Performs an existence test per rule and returns the messages of the
/// rules that matched, in catalog order. Applies the same catalog as
/// [`analyze`]; only the aggregation differs.
///
/// # Example
///
/// ```
/// use slow_query_detector::rules::summarize;
///
/// let messages = summarize("SELECT * FROM a; SELECT * FROM b");
/// assert_eq!(messages.len(), 1);
/// ```
pub fn summarize(text: &str) -> Vec<&'static str> {
    catalog()
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.message)
        .collect()
}
