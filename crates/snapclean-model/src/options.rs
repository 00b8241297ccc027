//! Configuration options for cleaning and export.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One cleaning transform, in the order the pipeline runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CleaningStep {
    TrimWhitespace,
    NormalizeHeaders,
    RemoveEmptyRows,
    RemoveEmptyColumns,
    RemoveDuplicates,
}

impl CleaningStep {
    /// Every step in pipeline order.
    pub const ALL: [CleaningStep; 5] = [
        CleaningStep::TrimWhitespace,
        CleaningStep::NormalizeHeaders,
        CleaningStep::RemoveEmptyRows,
        CleaningStep::RemoveEmptyColumns,
        CleaningStep::RemoveDuplicates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CleaningStep::TrimWhitespace => "Trim whitespace",
            CleaningStep::NormalizeHeaders => "Normalize headers",
            CleaningStep::RemoveEmptyRows => "Remove empty rows",
            CleaningStep::RemoveEmptyColumns => "Remove empty columns",
            CleaningStep::RemoveDuplicates => "Remove duplicate rows",
        }
    }
}

impl fmt::Display for CleaningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flags selecting which cleaning transforms run.
///
/// The order in which transforms execute is fixed by [`CleaningStep::ALL`],
/// not by the order flags are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Trim leading/trailing whitespace from headers and cells.
    pub trim_whitespace: bool,
    /// Lowercase headers, map spaces to underscores, drop other symbols.
    pub normalize_headers: bool,
    /// Drop rows whose cells are all blank.
    pub remove_empty_rows: bool,
    /// Drop columns whose cells are all blank.
    pub remove_empty_columns: bool,
    /// Drop exact repeats of an earlier row.
    pub remove_duplicates: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every transform enabled.
    pub fn all() -> Self {
        Self {
            trim_whitespace: true,
            normalize_headers: true,
            remove_empty_rows: true,
            remove_empty_columns: true,
            remove_duplicates: true,
        }
    }

    pub fn is_enabled(&self, step: CleaningStep) -> bool {
        match step {
            CleaningStep::TrimWhitespace => self.trim_whitespace,
            CleaningStep::NormalizeHeaders => self.normalize_headers,
            CleaningStep::RemoveEmptyRows => self.remove_empty_rows,
            CleaningStep::RemoveEmptyColumns => self.remove_empty_columns,
            CleaningStep::RemoveDuplicates => self.remove_duplicates,
        }
    }

    /// Flips a single flag, as a menu toggle would.
    pub fn toggle(&mut self, step: CleaningStep) {
        let flag = match step {
            CleaningStep::TrimWhitespace => &mut self.trim_whitespace,
            CleaningStep::NormalizeHeaders => &mut self.normalize_headers,
            CleaningStep::RemoveEmptyRows => &mut self.remove_empty_rows,
            CleaningStep::RemoveEmptyColumns => &mut self.remove_empty_columns,
            CleaningStep::RemoveDuplicates => &mut self.remove_duplicates,
        };
        *flag = !*flag;
    }

    /// Enabled steps in pipeline order.
    pub fn enabled_steps(&self) -> Vec<CleaningStep> {
        CleaningStep::ALL
            .into_iter()
            .filter(|step| self.is_enabled(*step))
            .collect()
    }

    pub fn is_noop(&self) -> bool {
        CleaningStep::ALL.iter().all(|step| !self.is_enabled(*step))
    }
}

/// Output file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Destination file; created or truncated.
    pub path: PathBuf,
}

impl ExportOptions {
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self {
            format: ExportFormat::Csv,
            path: path.into(),
        }
    }
}
