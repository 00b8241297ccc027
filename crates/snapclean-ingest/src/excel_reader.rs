//! Excel workbook loading.

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use chrono::{NaiveDateTime, Timelike};
use snapclean_model::Table;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::loader::table_from_records;
use crate::preflight::check_file_size;

/// Load the first worksheet of an Excel workbook into a table.
///
/// Every cell is rendered as text; empty cells become `""` and dates become
/// ISO text. Columns are anchored at column A, so an empty leading column
/// shows up as a blank column. Leading empty rows are skipped: the first
/// non-empty row is the header row.
pub fn load_excel(path: &Path) -> Result<Table> {
    check_file_size(path)?;
    let excel_error = |message: String| IngestError::Excel {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|err| excel_error(err.to_string()))?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    };
    debug!(sheet = %sheet, "reading first worksheet");
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|err| excel_error(err.to_string()))?;
    table_from_records(path, range_records(&range))
}

fn range_records(range: &Range<Data>) -> Vec<Vec<String>> {
    let leading_columns = range.start().map_or(0, |(_, column)| column as usize);
    range
        .rows()
        .map(|row| {
            std::iter::repeat_n(String::new(), leading_columns)
                .chain(row.iter().map(cell_text))
                .collect()
        })
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::DateTime(value) if !value.is_duration() => cell
            .as_datetime()
            .map_or_else(|| cell.to_string(), format_datetime),
        other => other.to_string(),
    }
}

/// `2024-01-15` for whole days, `2024-01-15 13:45:00` otherwise.
fn format_datetime(value: NaiveDateTime) -> String {
    if value.time().num_seconds_from_midnight() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
