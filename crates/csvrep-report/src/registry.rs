use tracing::debug;

use crate::error::{ReportError, Result};
use crate::report::Report;

/// Builds a fresh report instance.
pub type ReportConstructor = fn() -> Box<dyn Report>;

/// Name → constructor mapping for the available reports.
///
/// The registry is an explicit object owned by the orchestrator: built empty,
/// populated once at startup via [`ReportRegistry::register`], and read
/// through [`ReportRegistry::get`] afterwards. Names are case-sensitive and
/// kept in insertion order. There is no removal operation, and mutation is
/// not synchronized; callers sharing a registry across threads must guard
/// `register` themselves.
#[derive(Debug, Default)]
pub struct ReportRegistry {
    reports: Vec<(String, ReportConstructor)>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under `name`.
    ///
    /// Re-registering an existing name silently replaces the previous
    /// constructor, keeping its original position.
    pub fn register(&mut self, name: impl Into<String>, constructor: ReportConstructor) {
        let name = name.into();
        match self.reports.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                debug!(report = %name, "replacing registered report");
                entry.1 = constructor;
            }
            None => {
                debug!(report = %name, "registering report");
                self.reports.push((name, constructor));
            }
        }
    }

    /// Construct a fresh instance of the report registered under `name`.
    ///
    /// # Errors
    ///
    /// [`ReportError::UnknownReport`] listing the registered names when
    /// `name` is absent.
    pub fn get(&self, name: &str) -> Result<Box<dyn Report>> {
        match self.reports.iter().find(|(n, _)| n == name) {
            Some((_, constructor)) => Ok(constructor()),
            None => Err(ReportError::UnknownReport {
                name: name.to_string(),
                available: self.available().collect::<Vec<_>>().join(", "),
            }),
        }
    }

    /// Registered report names in insertion order.
    pub fn available(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }
}
