//! Error types for csvstream

use thiserror::Error;

/// Errors that can occur while reading a CSV stream
///
/// End of input is never an error: reading past the last line yields
/// `Ok(None)`. Lookup misses return `None` from the accessor itself.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Failed to pull bytes from the input stream
    #[error("Read error: {0}")]
    ReadError(String),
}

/// Result type alias using [`CsvError`]
pub type Result<T> = std::result::Result<T, CsvError>;
