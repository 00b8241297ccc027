use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use snapclean_model::{ExportFormat, ExportOptions, Table};
use tracing::info;

use crate::error::{OutputError, Result};

/// Write `table` as CSV into any writer.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new().flexible(true).from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `table` to `options.path`, creating parent directories and
/// truncating any existing file.
pub fn export_table(table: &Table, options: &ExportOptions) -> Result<()> {
    let path = options.path.as_path();
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match options.format {
        ExportFormat::Csv => write_csv(table, file)?,
    }
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "exported table"
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
