//! The built-in anti-pattern catalog.
//!
//! Each entry is a pattern/message pair. Patterns are case-insensitive
//! (`(?i)`) and searched anywhere in the text; the `s` flag is set on
//! patterns whose keyword gaps must span newlines. The catalog is
//! compiled once per process and never mutated afterwards.

use std::sync::LazyLock;

use super::types::Rule;

/// Raw catalog entries in reporting order.
const ENTRIES: &[(&str, &str)] = &[
    // wildcard projections and searches
    (
        r"(?i)SELECT \*",
        "Avoid using 'SELECT *'. Specify the columns you need to reduce I/O and network traffic."
    ),
    (
        r"(?i)WHERE\s+\w+\s+(?:NOT\s+)?LIKE\s+'%",
        "Avoid leading wildcards in LIKE clauses (e.g., '%value'). They prevent index usage and force full table scans."
    ),
    // join shapes
    (
        r"(?is)\bJOIN\b.*\bON\b.*\bIS\s+NULL",
        "Ensure indexes exist for JOIN conditions, especially when using IS NULL."
    ),
    (
        r"(?i)\bLEFT\s+JOIN\b|\bRIGHT\s+JOIN\b",
        "Outer joins can be slower than inner joins. Ensure they're necessary and properly indexed."
    ),
    // NULL comparisons
    (
        r"(?i)WHERE\s+\w+\s*=\s*NULL",
        "Use 'IS NULL' instead of '= NULL'. Comparing with NULL using = will always return false."
    ),
    (
        r"(?i)WHERE\s+\w+\s*<>\s*NULL",
        "Use 'IS NOT NULL' instead of '<> NULL' or '!= NULL'. Comparing with NULL using <> will always return false."
    ),
    // ordering and pagination
    (
        r"(?is)\bORDER\s+BY\b.*\bLIMIT\b",
        "Ordering large datasets with LIMIT may cause performance issues. Consider using indexed columns for ORDER BY."
    ),
    (
        r"(?i)\bORDER\s+BY\s+RAND\(\)",
        "ORDER BY RAND() is extremely inefficient for large datasets. Consider alternative randomization methods."
    ),
    // aggregation
    (
        r"(?is)\bGROUP\s+BY\b.*\bHAVING\b",
        "HAVING clauses can be slow. Consider using WHERE before GROUP BY when possible."
    ),
    // subqueries
    (
        r"(?is)WHERE\s+.*\bIN\s*\(\s*SELECT",
        "IN + subquery can be slow. Consider using EXISTS or JOIN instead for better performance."
    ),
    (
        r"(?i)FROM\s*\(\s*SELECT",
        "Derived tables (subqueries in FROM) might impact performance. Consider using CTEs or temporary tables."
    ),
    // predicates that defeat indexes
    (
        r"(?i)WHERE\s+\w+\s*=\s*\w+\([^)]*\)",
        "Using functions in WHERE clauses prevents index usage. Consider restructuring the query."
    ),
    (
        r"(?i)\bDISTINCT\b",
        "DISTINCT can be expensive. Consider if it's really needed or if the query can be rewritten."
    ),
    (
        r"(?is)WHERE.*\bOR\b",
        "OR conditions might prevent optimal index usage. Consider UNION ALL or restructuring the query."
    ),
    // temp tables
    (
        r"(?i)\bINTO\s+#",
        "Consider indexing temporary tables if they're used in subsequent joins or where clauses."
    )
];

/// Compiled catalog, process-wide constant.
static CATALOG: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|&(pattern, message)| Rule::new(pattern, message))
        .collect()
});

/// The catalog in reporting order.
pub fn rules() -> &'static [Rule] {
    &CATALOG
}
