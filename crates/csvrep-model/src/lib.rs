//! Shared data model for the CSV reporter.
//!
//! A [`Row`] is one CSV record keyed by header column name, values kept as
//! the raw strings read from the file. Reports consume rows and produce
//! [`ReportRow`]s whose cells are [`Value`]s (text or numbers).

mod value;

pub use value::Value;

use std::collections::BTreeMap;

/// One CSV data record: column name → raw cell value.
pub type Row = BTreeMap<String, String>;

/// One report output record: output field name → cell value.
pub type ReportRow = BTreeMap<String, Value>;
