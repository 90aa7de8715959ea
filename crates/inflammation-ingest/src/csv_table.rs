//! Headerless numeric CSV reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use inflammation_model::{InflammationTable, Trial};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Load an inflammation table from a comma-separated file.
///
/// Each line is one patient, each field one day's reading. There is no header
/// row. Lines starting with `#` and blank lines are skipped, fields are
/// trimmed, and `nan` marks a missing reading.
pub fn load_csv(path: &Path) -> Result<InflammationTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = read_table_from_reader(BufReader::new(file), path)?;
    debug!(
        path = %path.display(),
        patients = table.patients(),
        days = table.days(),
        "loaded inflammation table"
    );
    Ok(table)
}

/// Load a CSV file as a named trial.
pub fn load_trial(path: &Path, id: impl Into<String>) -> Result<Trial> {
    Ok(Trial::new(id, load_csv(path)?))
}

/// Parse readings from any reader. `path` only labels errors.
pub fn read_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<InflammationTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        if let Some(expected) = rows.first().map(Vec::len)
            && record.len() != expected
        {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected,
                found: record.len(),
            });
        }
        let row = record
            .iter()
            .enumerate()
            .map(|(column, value)| {
                value
                    .parse::<f64>()
                    .map_err(|_| IngestError::InvalidNumber {
                        path: path.to_path_buf(),
                        line,
                        column,
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(InflammationTable::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<InflammationTable> {
        read_table_from_reader(contents.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn parses_rows_and_missing_readings() {
        let table = parse("0,1,2\n3, nan ,5\n").unwrap();
        assert_eq!(table.patients(), 2);
        assert_eq!(table.days(), 3);
        let rows = table.to_rows();
        assert_eq!(rows[0], vec![0.0, 1.0, 2.0]);
        assert!(rows[1][1].is_nan());
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let table = parse("# patient readings\n1,2\n\n3,4\n").unwrap();
        assert_eq!(table.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn reports_line_of_ragged_row() {
        let err = parse("1,2,3\n4,5\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_fields() {
        let err = parse("1,,3\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidNumber { line: 1, column: 1, ref value, .. } if value.is_empty()
        ));
    }
}
