//! Read-only data-quality checks for snapclean tables.
//!
//! Every entry point accepts either `&Table` or `Option<&Table>`. An absent
//! table, or one without rows, yields zero metrics rather than an error:
//! having nothing to validate is a normal state.

pub mod checks;

use std::collections::BTreeMap;

use snapclean_model::{Table, ValidationResult};
use tracing::debug;

use crate::checks::{duplicates, empty, missing};

fn with_rows<'a>(table: impl Into<Option<&'a Table>>) -> Option<&'a Table> {
    table.into().filter(|table| !table.is_empty())
}

/// Compute duplicate, missing-value, empty-row and empty-column counts.
pub fn validate_data<'a>(table: impl Into<Option<&'a Table>>) -> ValidationResult {
    let Some(table) = with_rows(table) else {
        return ValidationResult::default();
    };
    let result = ValidationResult::new(
        duplicates::count(table),
        missing::total(table),
        empty::empty_row_count(table),
        empty::empty_column_count(table),
    );
    debug!(
        duplicates = result.duplicate_count,
        missing = result.missing_value_count,
        empty_rows = result.empty_row_count,
        empty_columns = result.empty_column_count,
        total = result.total_issues,
        "validated table"
    );
    result
}

/// Indices of rows that belong to a duplicate group, first occurrences
/// included, in discovery order.
pub fn duplicate_row_indices<'a>(table: impl Into<Option<&'a Table>>) -> Vec<usize> {
    with_rows(table).map(duplicates::row_indices).unwrap_or_default()
}

/// Missing-value count per header name; duplicate names collapse onto the
/// right-most column.
pub fn missing_values_by_column<'a>(
    table: impl Into<Option<&'a Table>>,
) -> BTreeMap<String, usize> {
    with_rows(table).map(missing::by_header).unwrap_or_default()
}

/// Missing-value count per column position.
pub fn missing_values_per_column<'a>(table: impl Into<Option<&'a Table>>) -> Vec<usize> {
    with_rows(table).map(missing::per_column).unwrap_or_default()
}
