//! Format dispatch and table assembly shared by the readers.

use std::path::Path;

use snapclean_model::Table;
use tracing::{debug, info, warn};

use crate::csv_reader::load_csv;
use crate::error::{IngestError, Result};
use crate::excel_reader::load_excel;

/// Supported input formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Excel,
}

impl FileFormat {
    /// Detect the format of `path` from its lowercased extension.
    ///
    /// # Errors
    ///
    /// [`IngestError::UnsupportedFormat`] for anything but `.csv`, `.xlsx`,
    /// `.xlsm` and `.xls`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" | "xlsm" | "xls" => Ok(FileFormat::Excel),
            _ => Err(IngestError::UnsupportedFormat {
                extension: if extension.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }
}

/// Load a CSV or Excel file, choosing the reader from the extension.
pub fn load_file(path: &Path) -> Result<Table> {
    if path.as_os_str().is_empty() {
        return Err(IngestError::EmptyPath);
    }
    let format = FileFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading file");
    let table = match format {
        FileFormat::Csv => load_csv(path)?,
        FileFormat::Excel => load_excel(path)?,
    };
    info!(
        file = table.source_name.as_deref().unwrap_or_default(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Build a table from raw records: the first record is the header row, the
/// rest are padded with `""` or truncated to the header width.
pub(crate) fn table_from_records(path: &Path, records: Vec<Vec<String>>) -> Result<Table> {
    let mut records = records.into_iter();
    let Some(headers) = records.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let width = headers.len();
    let mut table = Table::new(headers).with_source(path);
    let mut padded = 0usize;
    let mut truncated = 0usize;
    for mut row in records {
        if row.len() < width {
            padded += 1;
            row.resize(width, String::new());
        } else if row.len() > width {
            truncated += 1;
            row.truncate(width);
        }
        table.add_row(row)?;
    }
    if padded > 0 || truncated > 0 {
        warn!(
            path = %path.display(),
            padded,
            truncated,
            width,
            "rows did not match header width"
        );
    }
    Ok(table)
}
