use std::io;

use slow_query_detector::error::{config_error, file_read_error, no_active_document_error};

#[test]
fn test_file_read_error() {
    let source = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/queries.sql", source);
    let _msg = error.to_string();
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration value");
    let _msg = error.to_string();
}

#[test]
fn test_no_active_document_error() {
    let error = no_active_document_error();
    let _msg = error.to_string();
}

#[test]
fn test_no_active_document_is_distinct_from_clean_result() {
    // an absent document is an error, not an empty finding list
    let result = slow_query_detector::diagnostics::summarize_document(None);
    assert!(result.is_err());
}
