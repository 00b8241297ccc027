//! Blank row and blank column counts.

use snapclean_model::{Table, is_blank_row};

pub fn empty_row_count(table: &Table) -> usize {
    table.rows.iter().filter(|row| is_blank_row(row)).count()
}

/// Columns whose cells are all blank. Rows too short to reach a column count
/// as blank for it.
pub fn empty_column_count(table: &Table) -> usize {
    (0..table.column_count())
        .filter(|&idx| table.is_blank_column(idx))
        .count()
}
