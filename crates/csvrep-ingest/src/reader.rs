//! Structural validation and loading of a single CSV file.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use csvrep_model::Row;

use crate::error::{IngestError, Result};

/// Default field separator.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Reads one CSV file identified by path.
///
/// The reader holds no parsed state; `validate` and `load` each re-open and
/// re-parse the file, so two calls on an unchanged file yield identical
/// results. Quoted fields (embedded delimiters, escaped double quotes) are
/// handled by the `csv` crate's standard quoting rules.
#[derive(Debug, Clone)]
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    /// Create a reader for `path` using the default `,` delimiter.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Create a reader for `path` with an explicit single-byte delimiter.
    pub fn with_delimiter(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Check the file's structure, returning a human-readable success message.
    ///
    /// The header line defines the expected column count; every subsequent
    /// row must match it exactly and contain no empty field. Blank lines are
    /// skipped by the parser and count neither as data rows nor as
    /// mismatches. The returned message states the number of data rows
    /// (header excluded).
    ///
    /// # Errors
    ///
    /// - [`IngestError::NotFound`] if the path is not an existing file.
    /// - [`IngestError::NotCsv`] if the extension is not `.csv` (exact,
    ///   case-sensitive).
    /// - [`IngestError::Empty`] if no data rows follow the header.
    /// - [`IngestError::ColumnMismatch`] on the first row whose field count
    ///   differs from the header's.
    /// - [`IngestError::EmptyValue`] on the first row containing an empty
    ///   field.
    /// - [`IngestError::Parse`] if the file cannot be decoded at all.
    pub fn validate(&self) -> Result<String> {
        debug!(path = %self.path.display(), "validating CSV file");

        if !self.path.is_file() {
            return Err(IngestError::NotFound {
                path: self.path.clone(),
            });
        }
        if !self.path.extension().is_some_and(|ext| ext == "csv") {
            return Err(IngestError::NotCsv {
                path: self.path.clone(),
            });
        }

        let mut reader = self.open()?;
        let header_len = self
            .map_parse_err(reader.headers().map(StringRecord::len))?;

        let mut row_count = 0usize;
        for record in reader.records() {
            let record = self.map_parse_err(record)?;
            row_count += 1;
            if record.len() != header_len {
                return Err(IngestError::ColumnMismatch {
                    path: self.path.clone(),
                    row: render_record(&record),
                });
            }
            if record.iter().any(str::is_empty) {
                return Err(IngestError::EmptyValue {
                    path: self.path.clone(),
                    row: render_record(&record),
                });
            }
        }

        if row_count == 0 {
            return Err(IngestError::Empty {
                path: self.path.clone(),
            });
        }

        debug!(path = %self.path.display(), rows = row_count, "CSV file is valid");
        Ok(format!(
            "CSV file {} is valid with {} rows.",
            self.path.display(),
            row_count
        ))
    }

    /// Parse the file into row maps keyed by the header line.
    ///
    /// Values are taken verbatim, with no trimming or type coercion. This is
    /// a best-effort parse: ragged rows are zipped against the header (extra
    /// fields dropped, missing columns absent from the map) rather than
    /// rejected. Run [`CsvReader::validate`] first for the structural
    /// guarantees.
    ///
    /// # Errors
    ///
    /// [`IngestError::NotFound`] for a missing file, [`IngestError::Parse`]
    /// if the parser cannot decode the file.
    pub fn load(&self) -> Result<Vec<Row>> {
        debug!(path = %self.path.display(), "loading CSV file");

        if !self.path.is_file() {
            return Err(IngestError::NotFound {
                path: self.path.clone(),
            });
        }

        let mut reader = self.open()?;
        let headers = self.map_parse_err(reader.headers())?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = self.map_parse_err(record)?;
            let mut row = Row::new();
            for (name, value) in headers.iter().zip(record.iter()) {
                row.insert(name.to_string(), value.to_string());
            }
            rows.push(row);
        }

        debug!(path = %self.path.display(), rows = rows.len(), "CSV file loaded");
        Ok(rows)
    }

    fn open(&self) -> Result<csv::Reader<std::fs::File>> {
        // Flexible so that ragged rows reach our own diagnostics instead of
        // the csv crate's UnequalLengths error.
        self.map_parse_err(
            ReaderBuilder::new()
                .delimiter(self.delimiter)
                .has_headers(true)
                .flexible(true)
                .from_path(&self.path),
        )
    }

    fn map_parse_err<T>(&self, result: std::result::Result<T, csv::Error>) -> Result<T> {
        result.map_err(|source| IngestError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

fn render_record(record: &StringRecord) -> String {
    let fields: Vec<&str> = record.iter().collect();
    format!("{fields:?}")
}
