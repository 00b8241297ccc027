//! Column rearrangement.

use snapclean_model::{Axis, Result, Table, TableError};
use tracing::debug;

/// Exchange columns `a` and `b`, headers included.
///
/// Rows too short to hold both indices are copied unchanged. Swapping a
/// column with itself yields an identical table.
///
/// # Errors
///
/// Returns [`TableError::IndexOutOfRange`] if either index is not a valid
/// column.
pub fn swap_columns(table: &Table, a: usize, b: usize) -> Result<Table> {
    for index in [a, b] {
        if index >= table.column_count() {
            return Err(TableError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                len: table.column_count(),
            });
        }
    }
    let mut result = table.clone();
    if a == b {
        return Ok(result);
    }
    result.headers.swap(a, b);
    for row in &mut result.rows {
        if a < row.len() && b < row.len() {
            row.swap(a, b);
        }
    }
    debug!(a, b, "swapped columns");
    Ok(result)
}
