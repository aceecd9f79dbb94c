//! Error types for the assay library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for assay operations.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no header to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A check needs a column the header does not provide.
    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    /// The header names the same column more than once.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),

    /// A present value in a numeric column could not be parsed.
    #[error("Invalid number '{value}' in column '{column}' at line {line}")]
    NumericFormat {
        line: usize,
        column: String,
        value: String,
    },

    /// The requested check code is not one of the known checks.
    #[error("Unknown check '{0}'; expected one of A, B, C, D, E, G, H, I, J, K")]
    UnknownCheck(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
