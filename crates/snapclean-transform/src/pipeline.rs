//! Composition of the cleaning transforms.

use snapclean_model::{CleanOptions, CleaningStep, Table};
use tracing::{debug, info, info_span};

use crate::cleaning::{
    normalize_headers, remove_duplicates, remove_empty_columns, remove_empty_rows,
    trim_whitespace,
};

/// Run one transform by step.
pub fn apply_step(table: &Table, step: CleaningStep) -> Table {
    match step {
        CleaningStep::TrimWhitespace => trim_whitespace(table),
        CleaningStep::NormalizeHeaders => normalize_headers(table),
        CleaningStep::RemoveEmptyRows => remove_empty_rows(table),
        CleaningStep::RemoveEmptyColumns => remove_empty_columns(table),
        CleaningStep::RemoveDuplicates => remove_duplicates(table),
    }
}

/// Apply every enabled transform to `table`.
///
/// Steps always run in the order trim, normalize headers, remove empty rows,
/// remove empty columns, remove duplicates. Trimming first makes
/// whitespace-only cells count as empty; deduplication last compares
/// already-cleaned values.
///
/// A table with no rows is returned unchanged and no transform runs. Callers
/// holding an `Option<Table>` clean it with `Option::map`.
pub fn apply_cleaning_options(table: &Table, options: &CleanOptions) -> Table {
    if table.is_empty() {
        debug!("table has no rows, skipping cleaning");
        return table.clone();
    }
    let span = info_span!(
        "clean",
        source = table.source_name.as_deref().unwrap_or("<memory>")
    );
    let _guard = span.enter();

    let steps = options.enabled_steps();
    let mut current: Option<Table> = None;
    for step in &steps {
        let input = current.as_ref().unwrap_or(table);
        let next = apply_step(input, *step);
        debug!(
            step = step.label(),
            rows = next.row_count(),
            columns = next.column_count(),
            "applied cleaning step"
        );
        current = Some(next);
    }
    let result = current.unwrap_or_else(|| table.clone());
    info!(
        steps = steps.len(),
        rows_before = table.row_count(),
        rows_after = result.row_count(),
        columns_before = table.column_count(),
        columns_after = result.column_count(),
        "cleaning complete"
    );
    result
}
