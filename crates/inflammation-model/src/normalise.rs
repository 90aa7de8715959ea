//! Per-patient normalisation against each patient's own peak reading.

use ndarray::{ArrayView1, Axis};
use tracing::{debug, warn};

use crate::error::{ModelError, Result};
use crate::table::InflammationTable;

/// Scale every row into `[0, 1]` by dividing by that row's peak reading.
///
/// Missing readings are left out of the peak and come back as 0. Divisions
/// that produce NaN (an all-zero row, or a row with no readings at all) also
/// map to 0, and any negative quotient is clamped to 0. The input table is not
/// modified.
///
/// # Errors
///
/// Returns [`ModelError::InvalidMeasurement`] for the first negative reading
/// in row-major order.
pub fn patient_normalise(table: &InflammationTable) -> Result<InflammationTable> {
    let data = table.as_array();
    if let Some(((row, column), &value)) = data.indexed_iter().find(|(_, value)| **value < 0.0) {
        return Err(ModelError::InvalidMeasurement { row, column, value });
    }

    let peaks = data.map_axis(Axis(1), peak_ignoring_missing);
    let mut normalised = data.to_owned();
    for (index, (mut row, &peak)) in normalised
        .axis_iter_mut(Axis(0))
        .zip(peaks.iter())
        .enumerate()
    {
        if peak.is_nan() {
            warn!(patient = index, "no readings to normalise against");
        }
        row.mapv_inplace(|value| clamp_unit(value / peak));
    }

    debug!(
        patients = table.patients(),
        days = table.days(),
        "normalised inflammation table"
    );
    Ok(InflammationTable::from_validated(normalised))
}

/// Largest non-missing value in a row, or NaN when every value is missing.
fn peak_ignoring_missing(row: ArrayView1<'_, f64>) -> f64 {
    row.iter()
        .copied()
        .filter(|value| !value.is_nan())
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn peak_skips_missing_readings() {
        let row = array![f64::NAN, 4.0, 2.0];
        assert_eq!(peak_ignoring_missing(row.view()), 4.0);
        let all_missing = array![f64::NAN, f64::NAN];
        assert!(peak_ignoring_missing(all_missing.view()).is_nan());
    }

    #[test]
    fn clamp_maps_nan_and_negatives_to_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn all_missing_row_normalises_to_zeros() {
        let table =
            InflammationTable::from_rows(vec![vec![f64::NAN, f64::NAN], vec![1.0, 2.0]]).unwrap();
        let normalised = patient_normalise(&table).unwrap();
        assert_eq!(normalised.to_rows(), vec![vec![0.0, 0.0], vec![0.5, 1.0]]);
    }

    #[test]
    fn reports_first_negative_position() {
        let table =
            InflammationTable::from_rows(vec![vec![1.0, 2.0], vec![3.0, -4.0], vec![-1.0, 0.0]])
                .unwrap();
        let err = patient_normalise(&table).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidMeasurement {
                row: 1,
                column: 1,
                value
            } if value == -4.0
        ));
    }
}
