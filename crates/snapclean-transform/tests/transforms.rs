//! Tests for the cleaning transforms and their composition.

use snapclean_model::{CleanOptions, CleaningStep, Table};
use snapclean_transform::{
    apply_cleaning_options, apply_step, normalize_headers, remove_duplicates,
    remove_empty_columns, remove_empty_rows, trim_whitespace,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(strings(headers));
    for row in rows {
        table.add_row(strings(row)).expect("add row");
    }
    table
}

#[test]
fn test_trim_whitespace() {
    let input = table(&[" Name ", "City\t"], &[&["  John ", "NYC"], &["\tJane", " "]]);
    let result = trim_whitespace(&input);
    assert_eq!(result.headers, strings(&["Name", "City"]));
    assert_eq!(result.rows[0], strings(&["John", "NYC"]));
    assert_eq!(result.rows[1], strings(&["Jane", ""]));
}

#[test]
fn test_normalize_headers() {
    let input = table(&[" First Name ", "Age @#$", "City/State"], &[]);
    let result = normalize_headers(&input);
    assert_eq!(result.headers, strings(&["first_name", "age", "citystate"]));
}

#[test]
fn test_normalize_headers_keeps_collisions() {
    let input = table(&["Name", "NAME", "name!"], &[]);
    let result = normalize_headers(&input);
    assert_eq!(result.headers, strings(&["name", "name", "name"]));
}

#[test]
fn test_remove_empty_rows() {
    let input = table(
        &["Name", "Age"],
        &[&["John", "30"], &["", ""], &["  ", "\t"], &["Jane", ""]],
    );
    let result = remove_empty_rows(&input);
    assert_eq!(result.row_count(), 2);
    assert_eq!(result.rows[0], strings(&["John", "30"]));
    assert_eq!(result.rows[1], strings(&["Jane", ""]));
}

#[test]
fn test_remove_empty_columns() {
    let input = table(
        &["Name", "Empty", "City"],
        &[&["John", "", "NYC"], &["Jane", "", "LA"]],
    );
    let result = remove_empty_columns(&input);
    assert_eq!(result.column_count(), 2);
    assert_eq!(result.headers, strings(&["Name", "City"]));
    assert_eq!(result.rows[0], strings(&["John", "NYC"]));
    assert_eq!(result.rows[1], strings(&["Jane", "LA"]));
}

#[test]
fn test_remove_empty_columns_without_rows_keeps_headers() {
    let input = table(&["Name", "Empty"], &[]);
    let result = remove_empty_columns(&input);
    assert_eq!(result.headers, strings(&["Name", "Empty"]));
}

#[test]
fn test_remove_duplicates_keeps_first() {
    let input = table(
        &["Name", "Age"],
        &[&["John", "30"], &["Jane", "25"], &["John", "30"], &["John", "31"]],
    );
    let result = remove_duplicates(&input);
    assert_eq!(
        result.rows,
        vec![
            strings(&["John", "30"]),
            strings(&["Jane", "25"]),
            strings(&["John", "31"]),
        ]
    );
}

#[test]
fn test_remove_duplicates_is_exact() {
    let input = table(&["Name"], &[&["John"], &["john"], &["John "]]);
    assert_eq!(remove_duplicates(&input).row_count(), 3);
}

#[test]
fn test_remove_duplicates_has_no_delimiter_collisions() {
    let input = table(&["a", "b"], &[&["x|||y", "z"], &["x", "y|||z"]]);
    assert_eq!(remove_duplicates(&input).row_count(), 2);
}

#[test]
fn test_full_pipeline() {
    let input = table(
        &["  Name  ", "Empty"],
        &[&["  John  ", ""], &["  John  ", ""], &["", "  "]],
    );
    let result = apply_cleaning_options(&input, &CleanOptions::all());
    assert_eq!(result.row_count(), 1);
    assert_eq!(result.column_count(), 1);
    assert_eq!(result.headers, strings(&["name"]));
    assert_eq!(result.rows[0], strings(&["John"]));
}

#[test]
fn test_pipeline_order_is_load_bearing() {
    let input = table(&["a", "b"], &[&["  a  ", "  a  "], &["a", "a"]]);

    let trim_then_dedupe = apply_cleaning_options(
        &input,
        &CleanOptions {
            remove_duplicates: true,
            trim_whitespace: true,
            ..CleanOptions::default()
        },
    );
    assert_eq!(trim_then_dedupe.row_count(), 1);

    let dedupe_then_trim = apply_step(
        &apply_step(&input, CleaningStep::RemoveDuplicates),
        CleaningStep::TrimWhitespace,
    );
    assert_eq!(dedupe_then_trim.row_count(), 2);
}

#[test]
fn test_whitespace_only_column_removed_after_trim() {
    let input = table(&["Name", "Pad"], &[&["John", "   "], &["Jane", "\t"]]);
    let result = apply_cleaning_options(
        &input,
        &CleanOptions {
            remove_empty_columns: true,
            ..CleanOptions::default()
        },
    );
    assert_eq!(result.headers, strings(&["Name"]));
}

#[test]
fn test_pipeline_preserves_provenance() {
    let input =
        table(&["Name"], &[&[" John "]]).with_source(std::path::Path::new("data/people.csv"));
    let result = apply_cleaning_options(&input, &CleanOptions::all());
    assert_eq!(result.source_name.as_deref(), Some("people.csv"));
}

#[test]
fn test_absent_table_stays_absent() {
    let absent: Option<Table> = None;
    let cleaned = absent.map(|table| apply_cleaning_options(&table, &CleanOptions::all()));
    assert!(cleaned.is_none());
}

#[test]
fn test_transforms_do_not_mutate_input() {
    let input = table(
        &[" Name ", "Empty"],
        &[&[" John ", ""], &[" John ", ""], &["", ""]],
    );
    let snapshot = input.clone();
    for step in CleaningStep::ALL {
        let _ = apply_step(&input, step);
    }
    let _ = apply_cleaning_options(&input, &CleanOptions::all());
    assert_eq!(input, snapshot);
}
