//! Average GDP per country.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use csvrep_model::{ReportRow, Row, Value};

use crate::error::{ReportError, Result};
use crate::report::Report;

/// Groups rows by `country`, averages the `gdp` column per group, and emits
/// `{country, average_gdp}` rows sorted by average descending.
///
/// Rows missing either column, or carrying a non-numeric `gdp`, are skipped
/// without error. Averages are rounded half-away-from-zero to two decimal
/// places. Ties order alphabetically by country name, which keeps the output
/// reproducible across runs.
#[derive(Debug, Default)]
pub struct AverageGdpReport;

impl Report for AverageGdpReport {
    fn name(&self) -> &'static str {
        "average-gdp"
    }

    fn generate(&self, rows: &[Row]) -> Result<Vec<ReportRow>> {
        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();

        for row in rows {
            let (Some(country), Some(gdp)) = (row.get("country"), row.get("gdp")) else {
                continue;
            };
            let Some(gdp) = parse_gdp(gdp.trim())? else {
                continue;
            };
            groups.entry(country.trim().to_string()).or_default().push(gdp);
        }
        debug!(countries = groups.len(), rows = rows.len(), "grouped GDP values");

        let mut result: Vec<ReportRow> = groups
            .into_iter()
            .map(|(country, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                ReportRow::from([
                    ("country".to_string(), Value::Text(country)),
                    ("average_gdp".to_string(), Value::Float(round2(mean))),
                ])
            })
            .collect();

        // Stable sort; equal averages keep the alphabetical group order.
        result.sort_by(|a, b| {
            average_of(b)
                .partial_cmp(&average_of(a))
                .unwrap_or(Ordering::Equal)
        });

        Ok(result)
    }
}

/// Parse a trimmed `gdp` cell, distinguishing "not numeric" from
/// "numeric but unconvertible".
///
/// Returns `Ok(None)` for values that are not floating-point literals (the
/// row is skipped). Values containing a `.` are taken as floats; anything
/// else must be an integer literal, and a float-valid literal that is not
/// one (`1e5`, `nan`, `inf`) is the defensive conversion error. Digit-only
/// values beyond the `i64` range still aggregate through the float parse,
/// losing precision past 2^53.
fn parse_gdp(raw: &str) -> Result<Option<f64>> {
    let Ok(as_float) = raw.parse::<f64>() else {
        return Ok(None);
    };
    if raw.contains('.') {
        return Ok(Some(as_float));
    }
    match raw.parse::<i64>() {
        Ok(n) => Ok(Some(n as f64)),
        Err(_) if is_integer_literal(raw) => Ok(Some(as_float)),
        Err(_) => Err(ReportError::Conversion {
            value: raw.to_string(),
        }),
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average_of(row: &ReportRow) -> f64 {
    row.get("average_gdp")
        .and_then(Value::as_f64)
        .unwrap_or(f64::NEG_INFINITY)
}
