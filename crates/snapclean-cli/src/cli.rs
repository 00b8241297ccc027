//! CLI argument definitions for snapclean.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use snapclean_model::CleanOptions;

#[derive(Parser)]
#[command(
    name = "snapclean",
    version,
    about = "Clean and validate tabular data files",
    long_about = "Clean and validate tabular data files.\n\n\
                  Reads CSV and Excel (.xlsx, .xlsm, .xls) files, applies the selected\n\
                  cleaning steps in a fixed order, and reports data-quality metrics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a file and write the result as CSV.
    Clean(CleanArgs),

    /// Report data-quality metrics for a file.
    Validate(ValidateArgs),

    /// Print one page of a file as a table.
    View(ViewArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV or Excel file to clean.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Trim leading and trailing whitespace from headers and cells.
    #[arg(long = "trim")]
    pub trim: bool,

    /// Lowercase headers and replace spaces with underscores.
    #[arg(long = "normalize-headers")]
    pub normalize_headers: bool,

    /// Remove rows whose cells are all blank.
    #[arg(long = "drop-empty-rows")]
    pub drop_empty_rows: bool,

    /// Remove columns whose cells are all blank.
    #[arg(long = "drop-empty-columns")]
    pub drop_empty_columns: bool,

    /// Remove rows that repeat an earlier row exactly.
    #[arg(long = "dedupe")]
    pub dedupe: bool,

    /// Enable every cleaning step.
    #[arg(long = "all")]
    pub all: bool,

    /// Swap two columns before cleaning, by 1-based position (repeatable).
    #[arg(long = "swap", value_name = "A:B", value_parser = parse_swap)]
    pub swaps: Vec<ColumnSwap>,

    /// Output file (default: print CSV to stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CleanArgs {
    /// Cleaning flags selected on the command line.
    pub fn clean_options(&self) -> CleanOptions {
        if self.all {
            return CleanOptions::all();
        }
        CleanOptions {
            trim_whitespace: self.trim,
            normalize_headers: self.normalize_headers,
            remove_empty_rows: self.drop_empty_rows,
            remove_empty_columns: self.drop_empty_columns,
            remove_duplicates: self.dedupe,
        }
    }
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV or Excel file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print a single JSON document instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ViewArgs {
    /// CSV or Excel file to view.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// First row to show (0-based).
    #[arg(long = "offset", default_value_t = 0)]
    pub offset: usize,

    /// Number of rows to show.
    #[arg(long = "limit", default_value_t = 10)]
    pub limit: usize,

    /// First column to show (0-based).
    #[arg(long = "column-offset", default_value_t = 0)]
    pub column_offset: usize,

    /// Number of columns to show.
    #[arg(long = "columns", default_value_t = 5)]
    pub columns: usize,
}

/// A pair of columns to exchange, stored as 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSwap {
    pub first: usize,
    pub second: usize,
}

/// Displays the pair the way it is written on the command line (1-based).
impl fmt::Display for ColumnSwap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first + 1, self.second + 1)
    }
}

/// Parse `A:B`, where both sides are 1-based column numbers.
pub fn parse_swap(value: &str) -> Result<ColumnSwap, String> {
    let Some((first, second)) = value.split_once(':') else {
        return Err(format!("expected A:B, got '{value}'"));
    };
    Ok(ColumnSwap {
        first: parse_position(first)?,
        second: parse_position(second)?,
    })
}

fn parse_position(raw: &str) -> Result<usize, String> {
    let position: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a column number"))?;
    if position == 0 {
        return Err("column numbers start at 1".to_string());
    }
    Ok(position - 1)
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
