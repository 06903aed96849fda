//! # Slow Query Detector
//!
//! Pattern-based static detection of slow SQL query anti-patterns.
//!
//! `slow-query-detector` scans raw SQL text against a fixed catalog of
//! fifteen case-insensitive regular-expression checks for constructs
//! correlated with poor query performance - unindexed wildcard
//! searches, implicit full scans, inefficient NULL comparisons, and
//! friends. It reports every occurrence with its exact source
//! location, or a one-message-per-rule summary for quick triage.
//!
//! The scan is deliberately lexical: no parsing, no AST, no dialect
//! awareness. That makes it instant and dependency-light, at the cost
//! of the occasional match inside a string literal or comment.
//!
//! # Quick Start
//!
//! ```bash
//! # Per-occurrence findings with file:line:column locations
//! slow-query-detector check queries.sql
//!
//! # Several files at once; non-SQL files are skipped silently
//! slow-query-detector check migrations/*.sql README.md
//!
//! # Machine-readable output
//! slow-query-detector check -f json queries.sql
//!
//! # Stream from stdin
//! echo "SELECT * FROM users" | slow-query-detector check -
//!
//! # One aggregate notification for a whole document
//! slow-query-detector summary queries.sql
//!
//! # List the catalog
//! slow-query-detector rules
//! ```
//!
//! # Rules
//!
//! | # | Trigger | Warning |
//! |---|---------|---------|
//! | 1 | `SELECT *` | Select only the columns you need |
//! | 2 | `LIKE '%...'` | Leading wildcard forces a full scan |
//! | 3 | `JOIN ... ON ... IS NULL` | Index the JOIN condition |
//! | 4 | `LEFT JOIN` / `RIGHT JOIN` | Outer joins cost more than inner |
//! | 5 | `= NULL` | Use `IS NULL` |
//! | 6 | `<> NULL` | Use `IS NOT NULL` |
//! | 7 | `ORDER BY ... LIMIT` | Sorting before limiting is expensive |
//! | 8 | `ORDER BY RAND()` | Inefficient randomization |
//! | 9 | `GROUP BY ... HAVING` | Prefer WHERE before GROUP BY |
//! | 10 | `IN (SELECT ...)` | Prefer EXISTS or JOIN |
//! | 11 | `FROM (SELECT ...)` | Prefer CTEs or temp tables |
//! | 12 | `WHERE col = func(...)` | Functions block index usage |
//! | 13 | `DISTINCT` | Deduplication is expensive |
//! | 14 | `OR` in WHERE | OR can defeat index usage |
//! | 15 | `INTO #temp` | Index temp tables |
//!
//! Every rule reports at severity `warning`. The catalog is fixed:
//! rule tuning and suppression are explicitly out of scope.
//!
//! # Exit Codes
//!
//! - `0` - No issues found
//! - `1` - Warnings found (or a CLI-level error such as an unreadable
//!   file or a summary request with no document)
//! - `2` - Errors found (reserved; no shipped rule reports errors)
//!
//! # Output Formats
//!
//! - `text` - `uri:line:column: warning: message` (default, colored)
//! - `json` - Structured JSON for programmatic processing
//! - `yaml` - YAML format
//!
//! # Configuration
//!
//! Output preferences only (the catalog is not configurable), loaded
//! from `.slow-query-detector.toml`, then
//! `~/.config/slow-query-detector/config.toml`:
//!
//! ```toml
//! [output]
//! format = "text"
//! color = true
//! ```
//!
//! # Modules
//!
//! - `rules` - The rule catalog and both evaluation modes
//! - `document` - Host-side document model and position translation
//! - `diagnostics` - Per-document findings store and summary path
//! - `output` - Result formatting for text, JSON, and YAML
//! - `config` - Output preference loading
//! - `cli` - Command-line interface definition
//! - `app` - Command runners behind the CLI
//! - `error` - Error types and constructors

use std::process;

use slow_query_detector::app;

fn main() {
    match app::run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
