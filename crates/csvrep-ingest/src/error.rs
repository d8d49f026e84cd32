//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating or loading a CSV file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// The path does not refer to an existing regular file.
    #[error("file {path} does not exist")]
    NotFound { path: PathBuf },

    /// The file exists but does not carry a `.csv` extension.
    #[error("file {path} is not a CSV file")]
    NotCsv { path: PathBuf },

    // === Structural Errors ===
    /// No data rows follow the header line.
    #[error("CSV file {path} is empty")]
    Empty { path: PathBuf },

    /// A data row has more or fewer columns than the header.
    #[error("row in {path} has more or fewer columns than the header: {row}")]
    ColumnMismatch { path: PathBuf, row: String },

    /// A data row contains an empty field value.
    #[error("empty value in row of {path}: {row}")]
    EmptyValue { path: PathBuf, row: String },

    // === Parser Errors ===
    /// The underlying CSV parser could not decode the file.
    #[error("failed to parse CSV {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
