use std::fmt;

use csvrep_model::{ReportRow, Row};

use crate::error::Result;

/// A pure transformation from combined input rows to output rows.
///
/// Implementations are stateless; the registry constructs a fresh instance
/// per lookup and nothing is retained between `generate` calls. The order of
/// the returned rows is part of each report's contract. `Debug` is required
/// so that `Result<Box<dyn Report>, _>` works with the usual test and
/// diagnostic helpers.
pub trait Report: fmt::Debug {
    /// Name shown in tracing output and diagnostics.
    fn name(&self) -> &'static str;

    /// Run the report over the combined rows of all input files.
    fn generate(&self, rows: &[Row]) -> Result<Vec<ReportRow>>;
}
