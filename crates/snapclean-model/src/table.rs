#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Axis, Result, TableError};

/// In-memory table of text cells.
///
/// Every row added through [`Table::add_row`] has exactly one cell per
/// header. Rows built elsewhere (see [`Table::from_parts`]) are not checked,
/// so accessors treat a short row as if its missing trailing cells were empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Path the table was loaded from.
    pub source_path: Option<PathBuf>,
    /// Final component of `source_path`.
    pub source_name: Option<String>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            source_path: None,
            source_name: None,
        }
    }

    /// Builds a table without checking row widths.
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            source_path: None,
            source_name: None,
        }
    }

    /// Records where the table came from.
    #[must_use]
    pub fn with_source(mut self, path: &Path) -> Self {
        self.source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.source_path = Some(path.to_path_buf());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// A table with headers but no rows holds no data and counts as empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DimensionMismatch`] when the row width differs
    /// from the header count; the table is left untouched in that case.
    pub fn add_row(&mut self, cells: Vec<String>) -> Result<()> {
        if cells.len() != self.headers.len() {
            return Err(TableError::DimensionMismatch {
                expected: self.headers.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] when `index >= row_count()`.
    pub fn row(&self, index: usize) -> Result<&[String]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(TableError::IndexOutOfRange {
                axis: Axis::Row,
                index,
                len: self.rows.len(),
            })
    }

    /// Collects the `index`-th cell of every row, using `""` for rows that
    /// are too short to have one.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] when `index >= column_count()`.
    pub fn column(&self, index: usize) -> Result<Vec<String>> {
        self.check_column(index)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// True when every cell in column `index` is blank. Rows too short to
    /// reach the column count as blank there.
    pub fn is_blank_column(&self, index: usize) -> bool {
        self.rows
            .iter()
            .all(|row| row.get(index).is_none_or(|cell| cell.trim().is_empty()))
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index >= self.headers.len() {
            return Err(TableError::IndexOutOfRange {
                axis: Axis::Column,
                index,
                len: self.headers.len(),
            });
        }
        Ok(())
    }
}

/// True when every cell is empty once surrounding whitespace is removed.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn add_row_rejects_wrong_width() {
        let mut table = Table::new(strings(&["a", "b"]));
        let err = table.add_row(strings(&["1"])).unwrap_err();
        assert_eq!(
            err,
            TableError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(table.is_empty());
    }

    #[test]
    fn column_pads_short_rows() {
        let table = Table::from_parts(
            strings(&["a", "b"]),
            vec![strings(&["1", "2"]), strings(&["3"])],
        );
        assert_eq!(table.column(1).unwrap(), strings(&["2", ""]));
    }

    #[test]
    fn with_source_sets_name() {
        let table = Table::new(Vec::new()).with_source(Path::new("/tmp/data/people.csv"));
        assert_eq!(table.source_name.as_deref(), Some("people.csv"));
        assert_eq!(
            table.source_path.as_deref(),
            Some(Path::new("/tmp/data/people.csv"))
        );
    }

    #[test]
    fn blank_row_ignores_whitespace() {
        assert!(is_blank_row(&strings(&["", "  ", "\t"])));
        assert!(!is_blank_row(&strings(&["", "x"])));
        assert!(is_blank_row(&[]));
    }

    #[test]
    fn blank_column_treats_short_rows_as_blank() {
        let table = Table::from_parts(
            strings(&["a", "b"]),
            vec![strings(&["1"]), strings(&["2", "  "])],
        );
        assert!(!table.is_blank_column(0));
        assert!(table.is_blank_column(1));
    }
}
