//! Standalone cleaning transforms.
//!
//! Each function reads its input table and returns a fresh one; the input is
//! never modified. The functions can be used on their own or composed through
//! [`crate::apply_cleaning_options`].

use std::collections::HashSet;

use snapclean_model::{Table, is_blank_row};
use tracing::debug;

/// Trim leading/trailing whitespace from every header and every cell.
pub fn trim_whitespace(table: &Table) -> Table {
    let mut result = table.clone();
    for header in &mut result.headers {
        trim_in_place(header);
    }
    for cell in result.rows.iter_mut().flatten() {
        trim_in_place(cell);
    }
    debug!(
        rows = result.row_count(),
        columns = result.column_count(),
        "trimmed whitespace"
    );
    result
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Rewrite every header as a lowercase identifier.
///
/// Collisions between normalized names are left as they are.
pub fn normalize_headers(table: &Table) -> Table {
    let mut result = table.clone();
    for header in &mut result.headers {
        *header = normalize_header(header);
    }
    debug!(headers = ?result.headers, "normalized headers");
    result
}

/// Normalize a single header name.
///
/// Spaces become underscores; every other character outside `[a-z0-9_]` is
/// dropped rather than replaced, so `"City/State"` becomes `"citystate"`.
///
/// # Examples
///
/// ```
/// use snapclean_transform::normalize_header;
///
/// assert_eq!(normalize_header(" First Name "), "first_name");
/// assert_eq!(normalize_header("Age @#$"), "age");
/// assert_eq!(normalize_header("City/State"), "citystate");
/// ```
pub fn normalize_header(raw: &str) -> String {
    let normalized: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '_')
        .collect();
    normalized.trim_matches('_').to_string()
}

/// Drop rows whose cells are all blank, keeping survivors in order.
pub fn remove_empty_rows(table: &Table) -> Table {
    let mut result = table.clone();
    result.rows.retain(|row| !is_blank_row(row));
    debug!(
        before = table.row_count(),
        after = result.row_count(),
        "removed empty rows"
    );
    result
}

/// Drop columns whose cells are all blank, filtering headers in lockstep.
///
/// A table without rows is returned unchanged: every column would be
/// vacuously blank.
pub fn remove_empty_columns(table: &Table) -> Table {
    if table.is_empty() {
        return table.clone();
    }
    let keep: Vec<usize> = (0..table.column_count())
        .filter(|&idx| !table.is_blank_column(idx))
        .collect();

    let mut result = table.clone();
    result.headers = keep.iter().map(|&idx| table.headers[idx].clone()).collect();
    result.rows = table
        .rows
        .iter()
        .map(|row| {
            keep.iter()
                .map(|&idx| row.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    debug!(
        before = table.column_count(),
        after = result.column_count(),
        "removed empty columns"
    );
    result
}

/// Drop exact repeats of an earlier row, keeping the first occurrence.
///
/// Cells are compared as-is; no trimming or case folding happens here.
pub fn remove_duplicates(table: &Table) -> Table {
    if table.is_empty() {
        return table.clone();
    }
    let mut seen: HashSet<&[String]> = HashSet::with_capacity(table.row_count());
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter(|row| seen.insert(row.as_slice()))
        .cloned()
        .collect();

    let mut result = table.clone();
    result.rows = rows;
    debug!(
        before = table.row_count(),
        after = result.row_count(),
        "removed duplicate rows"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn normalize_header_examples() {
        assert_eq!(normalize_header(" First Name "), "first_name");
        assert_eq!(normalize_header("Age @#$"), "age");
        assert_eq!(normalize_header("City/State"), "citystate");
        assert_eq!(normalize_header("__ID__"), "id");
        assert_eq!(normalize_header("Ünit Price"), "nit_price");
        assert_eq!(normalize_header("@#$"), "");
    }

    #[test]
    fn remove_empty_columns_pads_short_rows() {
        let table = Table::from_parts(
            strings(&["a", "b", "c"]),
            vec![strings(&["1", "", "x"]), strings(&["2"])],
        );
        let result = remove_empty_columns(&table);
        assert_eq!(result.headers, strings(&["a", "c"]));
        assert_eq!(result.rows, vec![strings(&["1", "x"]), strings(&["2", ""])]);
    }

    #[test]
    fn trim_leaves_clean_values_alone() {
        let table = Table::from_parts(strings(&["a"]), vec![strings(&["x"])]);
        assert_eq!(trim_whitespace(&table), table);
    }
}
