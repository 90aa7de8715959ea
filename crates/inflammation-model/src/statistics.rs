//! Daily (per-column) and per-patient (per-row) reductions.
//!
//! Every reduction is defined once over a 1D lane of readings. The daily
//! variants map it across the columns of a table; the patient variants apply
//! it to a single row. Missing readings (NaN) propagate through all of them.

use ndarray::{Array1, ArrayView1, Axis};
use serde::Serialize;

use crate::table::InflammationTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reduction {
    Mean,
    Max,
    Min,
}

impl Reduction {
    fn apply(self, lane: ArrayView1<'_, f64>) -> f64 {
        if lane.is_empty() {
            return f64::NAN;
        }
        match self {
            Reduction::Mean => lane.sum() / lane.len() as f64,
            Reduction::Max => lane.iter().copied().fold(f64::NEG_INFINITY, propagating_max),
            Reduction::Min => lane.iter().copied().fold(f64::INFINITY, propagating_min),
        }
    }

    fn daily(self, table: &InflammationTable) -> Array1<f64> {
        table.as_array().map_axis(Axis(0), |column| self.apply(column))
    }
}

// f64::max / f64::min skip NaN; these keep it.
fn propagating_max(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.max(value)
    }
}

fn propagating_min(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.min(value)
    }
}

/// Mean reading for each day across all patients.
pub fn daily_mean(table: &InflammationTable) -> Array1<f64> {
    Reduction::Mean.daily(table)
}

/// Highest reading for each day across all patients.
pub fn daily_max(table: &InflammationTable) -> Array1<f64> {
    Reduction::Max.daily(table)
}

/// Lowest reading for each day across all patients.
pub fn daily_min(table: &InflammationTable) -> Array1<f64> {
    Reduction::Min.daily(table)
}

/// Mean of one patient's readings. NaN for an empty sequence.
pub fn data_mean(readings: ArrayView1<'_, f64>) -> f64 {
    Reduction::Mean.apply(readings)
}

pub fn data_max(readings: ArrayView1<'_, f64>) -> f64 {
    Reduction::Max.apply(readings)
}

pub fn data_min(readings: ArrayView1<'_, f64>) -> f64 {
    Reduction::Min.apply(readings)
}

/// The three daily reductions computed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStatistics {
    pub mean: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
}

impl DailyStatistics {
    pub fn compute(table: &InflammationTable) -> Self {
        Self {
            mean: daily_mean(table).to_vec(),
            max: daily_max(table).to_vec(),
            min: daily_min(table).to_vec(),
        }
    }

    pub fn days(&self) -> usize {
        self.mean.len()
    }
}

/// Scalar reductions for one patient row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatientSummary {
    pub index: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

impl PatientSummary {
    pub fn from_readings(index: usize, readings: ArrayView1<'_, f64>) -> Self {
        Self {
            index,
            mean: data_mean(readings),
            max: data_max(readings),
            min: data_min(readings),
        }
    }
}

/// One summary per patient, in row order.
pub fn patient_summaries(table: &InflammationTable) -> Vec<PatientSummary> {
    table
        .rows()
        .enumerate()
        .map(|(index, row)| PatientSummary::from_readings(index, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn max_and_min_propagate_missing() {
        let readings = array![1.0, f64::NAN, 3.0];
        assert!(data_max(readings.view()).is_nan());
        assert!(data_min(readings.view()).is_nan());
        assert!(data_mean(readings.view()).is_nan());
    }

    #[test]
    fn empty_sequence_reduces_to_nan() {
        let readings: Array1<f64> = Array1::zeros(0);
        assert!(data_mean(readings.view()).is_nan());
        assert!(data_max(readings.view()).is_nan());
        assert!(data_min(readings.view()).is_nan());
    }

    #[test]
    fn summaries_follow_row_order() {
        let table =
            InflammationTable::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 8.0, 0.0]]).unwrap();
        let summaries = patient_summaries(&table);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].index, 1);
        assert_eq!(summaries[1].mean, 4.0);
        assert_eq!(summaries[1].max, 8.0);
        assert_eq!(summaries[1].min, 0.0);
    }
}
