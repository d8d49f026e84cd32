//! Pipeline orchestration: validate, load, aggregate, render.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use csvrep_ingest::CsvReader;
use csvrep_model::Row;
use csvrep_report::{AverageGdpReport, ReportRegistry};

use crate::table::render_table;

/// Everything the pipeline needs from the command line.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub files: Vec<PathBuf>,
    pub report: String,
    pub delimiter: u8,
}

/// Build the registry with the shipped reports.
pub fn built_in_reports() -> ReportRegistry {
    let mut registry = ReportRegistry::new();
    registry.register("average-gdp", || Box::new(AverageGdpReport));
    registry
}

/// Run the whole pipeline, printing per-file validation messages and the
/// rendered report table to stdout.
///
/// Fail-fast: the first invalid file, unknown report name, or generation
/// error aborts the run and propagates to the caller.
pub fn run(args: &RunArgs) -> Result<()> {
    let registry = built_in_reports();

    let mut combined: Vec<Row> = Vec::new();
    for path in &args.files {
        let reader = CsvReader::with_delimiter(path, args.delimiter);
        let message = reader.validate()?;
        println!("{message}");
        let rows = reader.load()?;
        info!(path = %path.display(), rows = rows.len(), "loaded CSV file");
        combined.extend(rows);
    }

    let report = registry.get(&args.report)?;
    let result = report.generate(&combined)?;
    info!(
        report = %args.report,
        input_rows = combined.len(),
        output_rows = result.len(),
        "report generated"
    );

    let title = format!(
        "Report: {} ({} records)",
        args.report.to_uppercase(),
        combined.len()
    );
    println!();
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("{}", render_table(&result));

    Ok(())
}
