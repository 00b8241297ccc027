//! Subcommand implementations.

use std::io;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use snapclean_ingest::load_file;
use snapclean_model::{CleaningStep, CleaningSummary, ExportOptions, Table, ValidationResult};
use snapclean_output::{export_table, write_csv};
use snapclean_transform::{apply_cleaning_options, swap_columns};
use snapclean_validate::{duplicate_row_indices, missing_values_per_column, validate_data};

use crate::cli::{CleanArgs, ColumnSwap, ValidateArgs, ViewArgs};

/// What a `clean` run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub steps: Vec<CleaningStep>,
    pub summary: CleaningSummary,
}

/// Everything `validate` reports for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub result: ValidationResult,
    pub headers: Vec<String>,
    /// Missing values per column position.
    pub missing_by_column: Vec<usize>,
    /// 0-based row indices in discovery order.
    pub duplicate_rows: Vec<usize>,
}

/// The rows and columns `view` shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPage {
    pub table: Table,
    pub rows: Range<usize>,
    pub columns: Range<usize>,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean_file", file = %args.file.display());
    let _guard = span.enter();

    let table = load(&args.file)?;
    let table = apply_swaps(table, &args.swaps)?;
    let options = args.clean_options();
    if options.is_noop() {
        warn!("no cleaning steps selected; writing the table unchanged");
    }
    let cleaned = apply_cleaning_options(&table, &options);
    let summary = CleaningSummary::between(&table, &cleaned);

    match &args.output {
        Some(path) => export_table(&cleaned, &ExportOptions::csv(path))
            .with_context(|| format!("write {}", path.display()))?,
        None => write_csv(&cleaned, io::stdout().lock()).context("write csv to stdout")?,
    }

    Ok(CleanOutcome {
        steps: options.enabled_steps(),
        summary,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("validate_file", file = %args.file.display());
    let _guard = span.enter();

    let table = load(&args.file)?;
    let result = validate_data(&table);
    info!(total = result.total_issues, "validation complete");
    Ok(ValidationReport {
        file: args.file.display().to_string(),
        result,
        missing_by_column: missing_values_per_column(&table),
        duplicate_rows: duplicate_row_indices(&table),
        headers: table.headers,
    })
}

pub fn run_view(args: &ViewArgs) -> Result<ViewPage> {
    let table = load(&args.file)?;
    let rows = window(args.offset, args.limit, table.row_count());
    let columns = window(args.column_offset, args.columns, table.column_count());
    Ok(ViewPage {
        table,
        rows,
        columns,
    })
}

fn load(path: &Path) -> Result<Table> {
    load_file(path).with_context(|| format!("load {}", path.display()))
}

/// Apply each swap in order; positions refer to the table as it stands
/// after the previous swap.
fn apply_swaps(table: Table, swaps: &[ColumnSwap]) -> Result<Table> {
    swaps.iter().try_fold(table, |table, swap| {
        swap_columns(&table, swap.first, swap.second)
            .with_context(|| format!("swap columns {swap}"))
    })
}

/// `start..start + len`, clamped to `0..total`.
fn window(start: usize, len: usize, total: usize) -> Range<usize> {
    let start = start.min(total);
    start..start.saturating_add(len).min(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn window_clamps_to_bounds() {
        assert_eq!(window(0, 10, 3), 0..3);
        assert_eq!(window(2, 5, 10), 2..7);
        assert_eq!(window(12, 5, 10), 10..10);
        assert_eq!(window(1, usize::MAX, 4), 1..4);
    }

    #[test]
    fn swaps_apply_in_sequence() {
        let table = Table::from_parts(strings(&["a", "b", "c"]), vec![strings(&["1", "2", "3"])]);
        let swaps = [
            ColumnSwap {
                first: 0,
                second: 1,
            },
            ColumnSwap {
                first: 1,
                second: 2,
            },
        ];
        let swapped = apply_swaps(table, &swaps).unwrap();
        assert_eq!(swapped.headers, strings(&["b", "c", "a"]));
        assert_eq!(swapped.rows[0], strings(&["2", "3", "1"]));
    }

    #[test]
    fn swap_out_of_range_names_the_pair() {
        let table = Table::from_parts(strings(&["a"]), Vec::new());
        let swap = ColumnSwap {
            first: 0,
            second: 4,
        };
        let err = apply_swaps(table, &[swap]).unwrap_err();
        assert_eq!(err.to_string(), "swap columns 1:5");
    }
}
