pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Error for an on-demand summary requested with no active document.
///
/// Distinct from the "no issues found" outcome, which is informational.
pub fn no_active_document_error() -> AppError {
    AppError::bad_request("No active document detected.")
}
