//! Type definitions for the pattern-matching rule system.
//!
//! This module defines the core types used throughout the detector:
//! - [`Rule`] - A single pattern/message pair in the catalog
//! - [`Span`] - Byte range of a match in the analyzed text
//! - [`Severity`] - Diagnostic severity levels
//! - [`Finding`] - One reported match with message and location

use regex::Regex;
use serde::Serialize;

/// Severity level of a finding.
///
/// Ordered from lowest to highest severity for sorting purposes.
/// Exit codes are determined by the highest severity finding reported.
/// Every rule in the shipped catalog emits [`Severity::Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational suggestion, does not affect exit code
    Info,
    /// Warning that may indicate a problem (exit code 1)
    Warning,
    /// Critical issue that must be addressed (exit code 2)
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error")
        }
    }
}

/// Byte range of a rule match in the analyzed text.
///
/// Offsets index the original string directly:
/// `&text[span.start..span.end()]` is exactly the matched text. Hosts
/// that address documents by line and column translate spans with
/// [`position_at`](crate::document::position_at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Length of the match in bytes
    pub len:   usize
}

impl Span {
    /// Exclusive end offset of the match.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A single anti-pattern check: one compiled pattern and its fixed
/// message.
///
/// Rules are plain data. The catalog is an ordered list of these
/// records; iteration order determines reporting order when several
/// rules fire on the same text.
#[derive(Debug)]
pub struct Rule {
    /// Case-insensitive pattern, searched anywhere in the text
    pub pattern: Regex,
    /// Human-readable explanation reported for every match
    pub message: &'static str
}

impl Rule {
    /// Compile a catalog entry.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is not a valid regular expression. The
    /// catalog is static, so an invalid pattern is caught by the test
    /// suite rather than surfacing at analysis time.
    pub fn new(pattern: &str, message: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid regex"),
            message
        }
    }
}

/// One reported rule match.
///
/// The message is copied from the owning rule so findings remain
/// self-contained values independent of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// The owning rule's message
    pub message:  String,
    /// Location of the match in the analyzed text
    pub span:     Span,
    /// Severity of the finding
    pub severity: Severity
}
