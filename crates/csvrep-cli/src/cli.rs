//! CLI argument definitions for the CSV reporter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvrep",
    version,
    about = "Filtering and aggregating CSV files",
    long_about = "Validate one or more CSV files, concatenate their rows,\n\
                  and run a named report over the combined data."
)]
pub struct Cli {
    /// Paths to the CSV files to read.
    #[arg(
        long = "files",
        value_name = "FILE",
        num_args = 1..,
        required = true,
        action = ArgAction::Set
    )]
    pub files: Vec<PathBuf>,

    /// Name of the report to run over the combined rows.
    #[arg(long = "report", value_name = "NAME")]
    pub report: String,

    /// Field delimiter used by the input files.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// The csv crate takes a single-byte delimiter, so multi-byte input is
/// rejected at parse time.
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{raw}'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args.iter().copied())
    }

    #[test]
    fn parses_files_report_and_default_delimiter() {
        let cli = parse(&["csvrep", "--files", "a.csv", "b.csv", "--report", "average-gdp"])
            .unwrap();

        assert_eq!(cli.files, [PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert_eq!(cli.report, "average-gdp");
        assert_eq!(cli.delimiter, b',');
    }

    #[test]
    fn parses_custom_delimiter() {
        let cli = parse(&[
            "csvrep",
            "--files",
            "a.csv",
            "--report",
            "average-gdp",
            "--delimiter",
            ";",
        ])
        .unwrap();

        assert_eq!(cli.delimiter, b';');
    }

    #[test]
    fn rejects_multi_character_delimiter() {
        let result = parse(&[
            "csvrep",
            "--files",
            "a.csv",
            "--report",
            "average-gdp",
            "--delimiter",
            "::",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn files_and_report_are_required() {
        assert!(parse(&["csvrep", "--report", "average-gdp"]).is_err());
        assert!(parse(&["csvrep", "--files", "a.csv"]).is_err());
    }

    #[test]
    fn repeated_files_flag_is_rejected() {
        let result = parse(&[
            "csvrep",
            "--files",
            "a.csv",
            "--files",
            "b.csv",
            "--report",
            "average-gdp",
        ]);

        assert!(result.is_err());
    }
}
