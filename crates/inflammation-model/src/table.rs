//! Dense patient-by-day table of inflammation readings.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{ModelError, Result, ShapeError};
use crate::patient::Patient;

/// A rectangular table of readings: one row per patient, one column per day.
///
/// Missing readings are stored as NaN. The table always holds at least one
/// patient and one day, so the reductions never have to re-check shape.
#[derive(Debug, Clone, PartialEq)]
pub struct InflammationTable {
    data: Array2<f64>,
}

impl InflammationTable {
    /// Build a table from row vectors, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || expected == 0 {
            return Err(ShapeError::Empty {
                rows: rows.len(),
                columns: expected,
            }
            .into());
        }
        let mut flat = Vec::with_capacity(rows.len() * expected);
        for (row, readings) in rows.iter().enumerate() {
            if readings.len() != expected {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected,
                    found: readings.len(),
                }
                .into());
            }
            flat.extend_from_slice(readings);
        }
        let data = Array2::from_shape_vec((rows.len(), expected), flat).map_err(ShapeError::from)?;
        Ok(Self { data })
    }

    /// Wrap an existing array, rejecting tables without patients or days.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(ShapeError::Empty {
                rows: data.nrows(),
                columns: data.ncols(),
            }
            .into());
        }
        Ok(Self { data })
    }

    /// Number of patients (rows).
    pub fn patients(&self) -> usize {
        self.data.nrows()
    }

    /// Number of days (columns).
    pub fn days(&self) -> usize {
        self.data.ncols()
    }

    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Readings for one patient, or `None` past the last row.
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.patients()).then(|| self.data.row(index))
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.axis_iter(Axis(0))
    }

    /// True when any reading is missing.
    pub fn has_missing(&self) -> bool {
        self.data.iter().any(|value| value.is_nan())
    }

    /// Copy the table back out as row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Select a patient record by signed row index.
    ///
    /// Negative indices are not supported and are reported as out of range.
    pub fn patient(&self, index: isize) -> Result<Patient> {
        let selected = usize::try_from(index)
            .ok()
            .and_then(|row| self.row(row).map(|readings| (row, readings)));
        let Some((row, readings)) = selected else {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.patients(),
            });
        };
        Ok(Patient::new(row, readings.to_owned()))
    }

    pub(crate) fn from_validated(data: Array2<f64>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = InflammationTable::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Shape(ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn rejects_empty_tables() {
        assert!(matches!(
            InflammationTable::from_rows(Vec::new()),
            Err(ModelError::Shape(ShapeError::Empty { rows: 0, .. }))
        ));
        assert!(matches!(
            InflammationTable::from_rows(vec![Vec::new()]),
            Err(ModelError::Shape(ShapeError::Empty {
                rows: 1,
                columns: 0
            }))
        ));
        assert!(InflammationTable::from_array(Array2::zeros((0, 3))).is_err());
    }

    #[test]
    fn reports_shape_and_missing() {
        let table =
            InflammationTable::from_rows(vec![vec![0.0, f64::NAN, 1.0], vec![2.0, 3.0, 4.0]])
                .unwrap();
        assert_eq!(table.patients(), 2);
        assert_eq!(table.days(), 3);
        assert!(table.has_missing());
        assert!(table.row(2).is_none());
    }
}
