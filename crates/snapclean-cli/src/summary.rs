//! Terminal rendering of cleaning, validation and view results.

use std::ops::Range;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use snapclean_model::{CleaningStep, CleaningSummary, Table as DataTable, ValidationResult};

/// Before/after shape of a cleaning run.
pub fn clean_summary_table(summary: &CleaningSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Before"),
        header_cell("After"),
        header_cell("Removed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        label_cell("Rows"),
        Cell::new(summary.rows_before),
        Cell::new(summary.rows_after),
        removed_cell(summary.rows_removed()),
    ]);
    table.add_row(vec![
        label_cell("Columns"),
        Cell::new(summary.columns_before),
        Cell::new(summary.columns_after),
        removed_cell(summary.columns_removed()),
    ]);
    table
}

pub fn print_clean_summary(summary: &CleaningSummary, steps: &[CleaningStep]) {
    eprintln!("{}", steps_line(steps));
    eprintln!("{}", clean_summary_table(summary));
    eprintln!("{summary}");
}

fn steps_line(steps: &[CleaningStep]) -> String {
    if steps.is_empty() {
        return "Steps: none".to_string();
    }
    let labels: Vec<&str> = steps.iter().map(|step| step.label()).collect();
    format!("Steps: {}", labels.join(" → "))
}

/// One row per metric plus a bold total.
pub fn validation_table(result: &ValidationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Duplicate rows", result.duplicate_count),
        ("Missing values", result.missing_value_count),
        ("Empty rows", result.empty_row_count),
        ("Empty columns", result.empty_column_count),
    ];
    for (label, count) in rows {
        table.add_row(vec![label_cell(label), count_cell(count, Color::Yellow)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.total_issues, Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Missing-value counts next to their column positions and headers.
pub fn missing_table(headers: &[String], counts: &[usize]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, (header, count)) in headers.iter().zip(counts).enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(header),
            count_cell(*count, Color::Yellow),
        ]);
    }
    table
}

pub fn print_validation(
    result: &ValidationResult,
    headers: &[String],
    missing: &[usize],
    duplicates: &[usize],
) {
    println!("{}", validation_table(result));
    if !missing.is_empty() {
        println!();
        println!("Missing values by column:");
        println!("{}", missing_table(headers, missing));
    }
    if !duplicates.is_empty() {
        let rows: Vec<String> = duplicates.iter().map(|row| (row + 1).to_string()).collect();
        println!();
        println!("Duplicate rows: {}", rows.join(", "));
    }
}

/// A window of `data` with a leading row-number column.
pub fn page_table(data: &DataTable, rows: Range<usize>, columns: Range<usize>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(data.headers[columns.clone()].iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, row) in data.rows[rows.clone()].iter().enumerate() {
        let mut cells = vec![dim_cell(rows.start + index + 1)];
        cells.extend(
            columns
                .clone()
                .map(|column| Cell::new(row.get(column).map_or("", String::as_str))),
        );
        table.add_row(cells);
    }
    table
}

pub fn print_page(data: &DataTable, rows: Range<usize>, columns: Range<usize>) {
    println!(
        "Rows {}-{} of {}  Columns {}-{} of {}",
        rows.start + usize::from(!rows.is_empty()),
        rows.end,
        data.row_count(),
        columns.start + usize::from(!columns.is_empty()),
        columns.end,
        data.column_count()
    );
    println!("{}", page_table(data, rows, columns));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn removed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(format!("-{count}")).fg(Color::Green)
    } else {
        dim_cell(count)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
