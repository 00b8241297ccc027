//! Exact duplicate row detection.
//!
//! Rows are keyed by their full cell slice, so cell contents can never make
//! two different rows look alike.

use std::collections::{HashMap, HashSet};

use snapclean_model::Table;

/// Number of rows that repeat an earlier row. The first occurrence of each
/// group is not counted.
pub fn count(table: &Table) -> usize {
    let mut seen: HashSet<&[String]> = HashSet::with_capacity(table.row_count());
    table
        .rows
        .iter()
        .filter(|row| !seen.insert(row.as_slice()))
        .count()
}

/// Indices of every row taking part in a duplicate group, in discovery order.
///
/// When a repeat is found, the index of the group's first occurrence is
/// emitted (once per group) followed by the repeat's own index.
pub fn row_indices(table: &Table) -> Vec<usize> {
    let mut first_seen: HashMap<&[String], usize> = HashMap::with_capacity(table.row_count());
    let mut reported: HashSet<usize> = HashSet::new();
    let mut indices = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        match first_seen.get(row.as_slice()) {
            Some(&first) => {
                if reported.insert(first) {
                    indices.push(first);
                }
                indices.push(idx);
            }
            None => {
                first_seen.insert(row.as_slice(), idx);
            }
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_parts(
            vec!["a".to_string(), "b".to_string()],
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn counts_every_repeat() {
        let table = table(&[&["x", "1"], &["x", "1"], &["x", "1"], &["y", "2"]]);
        assert_eq!(count(&table), 2);
    }

    #[test]
    fn reports_first_occurrence_once() {
        let table = table(&[&["x", "1"], &["x", "1"], &["y", "2"], &["x", "1"]]);
        assert_eq!(row_indices(&table), vec![0, 1, 3]);
    }

    #[test]
    fn interleaved_groups_keep_discovery_order() {
        let table = table(&[&["a", ""], &["b", ""], &["a", ""], &["b", ""]]);
        assert_eq!(row_indices(&table), vec![0, 2, 1, 3]);
    }
}
