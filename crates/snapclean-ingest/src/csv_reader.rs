//! CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use snapclean_model::Table;

use crate::error::{IngestError, Result};
use crate::loader::table_from_records;
use crate::preflight::{check_file_size, io_error, strip_utf8_bom};

/// Load a CSV file into a table.
///
/// The first record becomes the header row. Records may have any number of
/// fields, lines starting with `#` are comments, and leading whitespace in
/// each field is dropped, also in front of an opening quote. Trailing
/// whitespace is kept.
pub fn load_csv(path: &Path) -> Result<Table> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|err| io_error(path, err))?;
    let data = strip_utf8_bom(path, &bytes)?;
    let records = parse_records(path, data)?;
    table_from_records(path, records)
}

fn parse_records(path: &Path, data: &[u8]) -> Result<Vec<Vec<String>>> {
    let data = unpad_quoted_fields(data);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(data.as_slice());
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        records.push(
            record
                .iter()
                .map(|field| field.trim_start().to_string())
                .collect(),
        );
    }
    Ok(records)
}

/// Drop blanks between the start of a field and its opening quote.
///
/// The csv reader only recognizes a quoted field when the quote is the first
/// byte of the field, so `a, "b, c"` would otherwise split inside the quotes.
/// Blanks in front of unquoted fields are left for the per-field trim, and
/// comment lines are copied untouched.
fn unpad_quoted_fields(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut rest = data;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut line_start = true;
    while let Some((&byte, tail)) = rest.split_first() {
        if in_quotes {
            out.push(byte);
            rest = tail;
            if byte == b'"' {
                if tail.first() == Some(&b'"') {
                    out.push(b'"');
                    rest = &tail[1..];
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }
        if line_start && byte == b'#' {
            let end = rest
                .iter()
                .position(|&b| b == b'\n')
                .map_or(rest.len(), |pos| pos + 1);
            out.extend_from_slice(&rest[..end]);
            rest = &rest[end..];
            continue;
        }
        if field_start {
            let blanks = rest.iter().take_while(|&&b| b == b' ' || b == b'\t').count();
            if blanks > 0 && rest.get(blanks) == Some(&b'"') {
                rest = &rest[blanks..];
                continue;
            }
        }
        in_quotes = field_start && byte == b'"';
        field_start = matches!(byte, b',' | b'\n' | b'\r');
        line_start = matches!(byte, b'\n' | b'\r');
        out.push(byte);
        rest = tail;
    }
    out
}
