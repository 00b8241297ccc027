//! Result types produced by the cleaning and validation passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Data-quality metrics for one table snapshot.
///
/// The counts are independent: a blank cell inside a blank row is counted
/// both as a missing value and as part of that empty row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub has_duplicates: bool,
    pub duplicate_count: usize,
    pub missing_value_count: usize,
    pub empty_row_count: usize,
    pub empty_column_count: usize,
    pub total_issues: usize,
}

impl ValidationResult {
    pub fn new(
        duplicate_count: usize,
        missing_value_count: usize,
        empty_row_count: usize,
        empty_column_count: usize,
    ) -> Self {
        Self {
            has_duplicates: duplicate_count > 0,
            duplicate_count,
            missing_value_count,
            empty_row_count,
            empty_column_count,
            total_issues: duplicate_count
                + missing_value_count
                + empty_row_count
                + empty_column_count,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.total_issues == 0
    }
}

/// Shape change produced by one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: usize,
    pub columns_after: usize,
}

impl CleaningSummary {
    pub fn between(before: &Table, after: &Table) -> Self {
        Self {
            rows_before: before.row_count(),
            rows_after: after.row_count(),
            columns_before: before.column_count(),
            columns_after: after.column_count(),
        }
    }

    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }

    pub fn columns_removed(&self) -> usize {
        self.columns_before.saturating_sub(self.columns_after)
    }
}

impl fmt::Display for CleaningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rows: {}→{} (-{})  Cols: {}→{} (-{})",
            self.rows_before,
            self.rows_after,
            self.rows_removed(),
            self.columns_before,
            self.columns_after,
            self.columns_removed()
        )
    }
}
