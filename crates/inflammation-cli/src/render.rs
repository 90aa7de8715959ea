//! Terminal rendering of statistics, normalised tables and query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use inflammation_db::{Record, SqlValue};
use inflammation_model::{DailyStatistics, InflammationTable, Patient, PatientSummary};

/// Format one reading; missing readings print as `nan`.
pub fn format_reading(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// One row per day with its mean, max and min across patients.
pub fn daily_statistics_table(stats: &DailyStatistics, precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Mean"),
        header_cell("Max"),
        header_cell("Min"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for day in 0..stats.days() {
        table.add_row(vec![
            Cell::new(day),
            reading_cell(stats.mean[day], precision),
            reading_cell(stats.max[day], precision),
            reading_cell(stats.min[day], precision),
        ]);
    }
    table
}

/// One row per patient with the scalar reductions of their readings.
pub fn patient_summaries_table(summaries: &[PatientSummary], precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Mean"),
        header_cell("Max"),
        header_cell("Min"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(summary.index),
            reading_cell(summary.mean, precision),
            reading_cell(summary.max, precision),
            reading_cell(summary.min, precision),
        ]);
    }
    table
}

/// A single patient's readings, one row per day.
pub fn patient_table(patient: &Patient, precision: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Day"), header_cell("Reading")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (day, &value) in patient.data.iter().enumerate() {
        table.add_row(vec![Cell::new(day), reading_cell(value, precision)]);
    }
    table
}

/// Rows of a query result, columns numbered from 0.
pub fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    let width = records.iter().map(Vec::len).max().unwrap_or(0);
    table.set_header((0..width).map(|column| header_cell(&column.to_string())));
    apply_table_style(&mut table);
    for record in records {
        table.add_row(record.iter().map(value_cell));
    }
    table
}

/// Render a table as CSV, one patient per line, without a trailing newline.
pub fn table_csv(table: &InflammationTable, precision: usize) -> String {
    table
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| format_reading(value, precision))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn reading_cell(value: f64, precision: usize) -> Cell {
    if value.is_nan() {
        dim_cell("nan")
    } else {
        Cell::new(format_reading(value, precision))
    }
}

fn value_cell(value: &SqlValue) -> Cell {
    match value {
        SqlValue::Null => dim_cell("NULL"),
        other => Cell::new(other),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
