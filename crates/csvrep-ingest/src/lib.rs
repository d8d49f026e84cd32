//! CSV ingestion for the report pipeline.
//!
//! [`CsvReader`] owns a file path and a delimiter and offers two independent
//! operations: [`CsvReader::validate`], which re-reads the file and checks its
//! structure (consistent column counts, no empty cells, at least one data
//! row), and [`CsvReader::load`], which parses the file into row maps keyed by
//! the header line. Neither operation caches anything; callers that want the
//! structural guarantees run `validate` before `load`.
//!
//! # Example
//!
//! ```ignore
//! use csvrep_ingest::CsvReader;
//!
//! let reader = CsvReader::new("data/economy.csv");
//! println!("{}", reader.validate()?);
//! let rows = reader.load()?;
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{CsvReader, DEFAULT_DELIMITER};
