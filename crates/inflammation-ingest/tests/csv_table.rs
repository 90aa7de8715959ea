use std::fs;
use std::path::PathBuf;

use inflammation_ingest::{IngestError, load_csv, load_trial};
use inflammation_model::daily_mean;
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_table_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "inflammation-01.csv", "1,2\n3,4\n5,6\n");
    let table = load_csv(&path).expect("load csv");
    assert_eq!(table.patients(), 3);
    assert_eq!(table.days(), 2);
    assert_eq!(daily_mean(&table).to_vec(), vec![3.0, 4.0]);
}

#[test]
fn loads_trial_with_identifier() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "trial.csv", "0,1,1\n1,2,4\n");
    let trial = load_trial(&path, "trial-01").expect("load trial");
    assert_eq!(trial.id, "trial-01");
    assert_eq!(trial.daily_max().to_vec(), vec![1.0, 2.0, 4.0]);
    let patient = trial.patient(1).expect("second patient");
    assert_eq!(patient.data.to_vec(), vec![1.0, 2.0, 4.0]);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_csv(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(!err.is_parse_error());
}

#[test]
fn malformed_number_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "bad.csv", "1,2,3\n4,five,6\n");
    let err = load_csv(&path).unwrap_err();
    assert!(err.is_parse_error());
    match err {
        IngestError::InvalidNumber {
            line,
            column,
            value,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(column, 1);
            assert_eq!(value, "five");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_file_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "ragged.csv", "1,2,3\n4,5,6\n7,8\n");
    let err = load_csv(&path).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(
        err,
        IngestError::RaggedRow {
            line: 3,
            expected: 3,
            found: 2,
            ..
        }
    ));
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "empty.csv", "# no readings yet\n\n");
    let err = load_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}
