//! Error types for report resolution and generation.

use thiserror::Error;

/// Errors that can occur while resolving or running a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested report name is not registered.
    #[error("report '{name}' isn't found. Available reports: {available}")]
    UnknownReport { name: String, available: String },

    /// A value that passed the numeric check could not be converted.
    ///
    /// Defensive path: the aggregation filters non-numeric values before
    /// conversion, so this only fires for float-valid literals that are not
    /// integer literals (for example `1e5` or `nan`).
    #[error("cannot convert value '{value}' to a number")]
    Conversion { value: String },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
