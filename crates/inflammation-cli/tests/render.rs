//! Rendering tests for CLI output.

use inflammation_cli::render::{
    daily_statistics_table, format_reading, patient_summaries_table, records_table, table_csv,
};
use inflammation_db::SqlValue;
use inflammation_model::{
    DailyStatistics, InflammationTable, patient_normalise, patient_summaries,
};

fn sample_table() -> InflammationTable {
    InflammationTable::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .expect("rectangular table")
}

#[test]
fn normalised_table_renders_as_csv() {
    let normalised = patient_normalise(&sample_table()).expect("normalise");
    insta::assert_snapshot!(table_csv(&normalised, 2), @r"
    0.33,0.67,1.00
    0.67,0.83,1.00
    0.78,0.89,1.00
    ");
}

#[test]
fn missing_readings_render_as_nan() {
    let table =
        InflammationTable::from_rows(vec![vec![f64::NAN, 1.5], vec![2.0, 0.26]]).expect("table");
    insta::assert_snapshot!(table_csv(&table, 1), @r"
    nan,1.5
    2.0,0.3
    ");
    assert_eq!(format_reading(f64::NAN, 3), "nan");
    assert_eq!(format_reading(1.0 / 3.0, 3), "0.333");
}

#[test]
fn daily_statistics_table_lists_each_day() {
    let stats = DailyStatistics::compute(&sample_table());
    let rendered = daily_statistics_table(&stats, 2).to_string();
    for header in ["Day", "Mean", "Max", "Min"] {
        assert!(rendered.contains(header), "missing header {header}");
    }
    assert!(rendered.contains("4.00"));
    assert!(rendered.contains("9.00"));
    assert_eq!(rendered.matches("5.00").count(), 1);
}

#[test]
fn patient_summaries_table_lists_each_patient() {
    let summaries = patient_summaries(&sample_table());
    let rendered = patient_summaries_table(&summaries, 1).to_string();
    assert!(rendered.contains("Patient"));
    assert!(rendered.contains("8.0"));
}

#[test]
fn records_table_shows_values() {
    let records = vec![vec![
        SqlValue::from("Bugs"),
        SqlValue::from("Rabbit"),
        SqlValue::Integer(6),
        SqlValue::Null,
    ]];
    let rendered = records_table(&records).to_string();
    assert!(rendered.contains("Bugs"));
    assert!(rendered.contains("Rabbit"));
    assert!(rendered.contains('6'));
    assert!(rendered.contains("NULL"));
}

#[test]
fn statistics_serialize_missing_as_null() {
    let table = InflammationTable::from_rows(vec![vec![1.0, f64::NAN], vec![3.0, 4.0]])
        .expect("table");
    let json = serde_json::to_value(DailyStatistics::compute(&table)).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "mean": [2.0, null],
            "max": [3.0, null],
            "min": [1.0, null],
        })
    );
}
