//! Missing value tallies.

use std::collections::BTreeMap;

use snapclean_model::Table;

/// Blank cells across all rows. Only cells a row actually holds are counted.
pub fn total(table: &Table) -> usize {
    table
        .rows
        .iter()
        .flatten()
        .filter(|cell| cell.trim().is_empty())
        .count()
}

/// Missing count for each column, by position. A row too short to reach a
/// column counts as missing there.
pub fn per_column(table: &Table) -> Vec<usize> {
    (0..table.column_count())
        .map(|idx| {
            table
                .rows
                .iter()
                .filter(|row| row.get(idx).is_none_or(|cell| cell.trim().is_empty()))
                .count()
        })
        .collect()
}

/// Missing count keyed by header name. When headers repeat, the right-most
/// column with that name wins.
pub fn by_header(table: &Table) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for (header, count) in table.headers.iter().zip(per_column(table)) {
        counts.insert(header.clone(), count);
    }
    counts
}
