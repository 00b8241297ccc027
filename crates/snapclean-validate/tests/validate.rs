//! Tests for the data-quality checks.

use proptest::prelude::*;
use snapclean_model::{CleanOptions, Table, ValidationResult};
use snapclean_transform::apply_cleaning_options;
use snapclean_validate::{
    duplicate_row_indices, missing_values_by_column, missing_values_per_column, validate_data,
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

fn people() -> Table {
    table(
        &["Name", "Age"],
        &[&["John", "30"], &["John", "30"], &["", ""], &["Jane", ""]],
    )
}

#[test]
fn test_validate_data() {
    let result = validate_data(&people());
    assert_eq!(result.duplicate_count, 1);
    assert!(result.has_duplicates);
    assert_eq!(result.empty_row_count, 1);
    assert_eq!(result.missing_value_count, 3);
    assert_eq!(result.empty_column_count, 0);
    assert_eq!(result.total_issues, 5);
}

#[test]
fn test_validate_counts_empty_columns() {
    let input = table(&["Name", "Empty"], &[&["John", " "], &["Jane", ""]]);
    let result = validate_data(&input);
    assert_eq!(result.empty_column_count, 1);
    assert_eq!(result.missing_value_count, 2);
    assert_eq!(result.empty_row_count, 0);
    assert!(!result.has_duplicates);
}

#[test]
fn test_validate_absent_or_empty_table() {
    assert_eq!(validate_data(None::<&Table>), ValidationResult::default());
    let headers_only = table(&["Name"], &[]);
    assert_eq!(validate_data(&headers_only), ValidationResult::default());
    assert!(duplicate_row_indices(None::<&Table>).is_empty());
    assert!(missing_values_by_column(&headers_only).is_empty());
    assert!(missing_values_per_column(None::<&Table>).is_empty());
}

#[test]
fn test_validate_accepts_option() {
    let data = Some(people());
    assert_eq!(validate_data(data.as_ref()).duplicate_count, 1);
}

#[test]
fn test_duplicate_row_indices() {
    let input = table(
        &["Name"],
        &[&["a"], &["b"], &["a"], &["a"], &["c"], &["b"]],
    );
    assert_eq!(duplicate_row_indices(&input), vec![0, 2, 3, 1, 5]);
}

#[test]
fn test_missing_values_by_column() {
    let counts = missing_values_by_column(&people());
    assert_eq!(counts.get("Name"), Some(&1));
    assert_eq!(counts.get("Age"), Some(&2));
    assert_eq!(missing_values_per_column(&people()), vec![1, 2]);
}

#[test]
fn test_validation_does_not_mutate() {
    let input = people();
    let snapshot = input.clone();
    let _ = validate_data(&input);
    let _ = duplicate_row_indices(&input);
    let _ = missing_values_by_column(&input);
    assert_eq!(input, snapshot);
}

#[test]
fn test_full_clean_leaves_no_structural_issues() {
    let cleaned = apply_cleaning_options(&people(), &CleanOptions::all());
    let result = validate_data(&cleaned);
    assert_eq!(result.duplicate_count, 0);
    assert_eq!(result.empty_row_count, 0);
    assert_eq!(result.empty_column_count, 0);
    assert_eq!(result.missing_value_count, 1);
}

proptest! {
    #[test]
    fn total_is_sum_of_counts(
        rows in prop::collection::vec(
            prop::collection::vec(prop_oneof![Just(""), Just(" "), Just("a"), Just("b")], 3),
            0..10,
        )
    ) {
        let input = Table::from_parts(
            strings(&["x", "y", "z"]),
            rows.iter().map(|row| strings(row)).collect(),
        );
        let result = validate_data(&input);
        prop_assert_eq!(
            result.total_issues,
            result.duplicate_count
                + result.missing_value_count
                + result.empty_row_count
                + result.empty_column_count
        );
        prop_assert_eq!(result.has_duplicates, result.duplicate_count > 0);
        let group = duplicate_row_indices(&input);
        prop_assert!(group.len() >= result.duplicate_count);
        if result.duplicate_count > 0 {
            prop_assert!(group.len() > result.duplicate_count);
        }
    }
}
