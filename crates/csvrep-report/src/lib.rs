//! Pluggable reports over combined CSV rows.
//!
//! A [`Report`] is a stateless transformation from a slice of input rows to
//! an ordered sequence of output rows. Reports are looked up by name through
//! a [`ReportRegistry`] that the orchestrator builds at startup, so new
//! report types can be added without touching the pipeline.
//!
//! One report ships with the tool: [`AverageGdpReport`], which averages the
//! `gdp` column per `country` and sorts the result descending.

mod average_gdp;
mod error;
mod registry;
mod report;

pub use average_gdp::AverageGdpReport;
pub use error::{ReportError, Result};
pub use registry::{ReportConstructor, ReportRegistry};
pub use report::Report;
