//! Host-side document model.
//!
//! The analysis core consumes plain text; documents are how hosts hand
//! that text over. A [`Document`] carries an identity (URI), a declared
//! content type (language id), and the full current text. Content-type
//! filtering and span-to-position translation are host concerns and
//! live here, not in the rule engine.

use std::path::Path;

use compact_str::CompactString;
use serde::Serialize;

use crate::error::{AppResult, file_read_error};

/// Language id of SQL documents. Compared case-insensitively.
pub const SQL_LANGUAGE_ID: &str = "sql";

/// A document as presented by the host: identity, declared content
/// type, and full current text.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Document identity (file path, editor URI, "<stdin>", ...)
    pub uri:         CompactString,
    /// Declared content type, e.g. "sql"
    pub language_id: CompactString,
    /// Full current text of the document
    pub text:        String
}

impl Document {
    /// Create a document from explicit parts.
    pub fn new(
        uri: impl Into<CompactString>,
        language_id: impl Into<CompactString>,
        text: impl Into<String>
    ) -> Self {
        Self {
            uri:         uri.into(),
            language_id: language_id.into(),
            text:        text.into()
        }
    }

    /// Read a document from disk, inferring the language id from the
    /// file extension (`.sql` becomes `"sql"`, anything else keeps the
    /// extension as-is, and an extension-less file is `"plaintext"`).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_read_error(&path.display().to_string(), e))?;

        let language_id = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| CompactString::from(ext.to_ascii_lowercase()))
            .unwrap_or_else(|| CompactString::const_new("plaintext"));

        Ok(Self {
            uri: CompactString::from(path.display().to_string()),
            language_id,
            text
        })
    }

    /// Whether the host declared this document to be SQL.
    pub fn is_sql(&self) -> bool {
        self.language_id.eq_ignore_ascii_case(SQL_LANGUAGE_ID)
    }
}

/// A 1-based line/column position in a document.
///
/// Columns count characters within the line, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line:   usize,
    pub column: usize
}

/// Translate a byte offset into a 1-based [`Position`].
///
/// Offsets past the end of the text clamp to the final position. The
/// rule engine reports byte spans only; this is the host-side
/// translation used for display.
pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let before = &text[..offset];

    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let column = before[line_start..].chars().count() + 1;

    Position {
        line,
        column
    }
}
