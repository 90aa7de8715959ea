//! Patient and trial records layered over the table reductions.

use ndarray::Array1;

use crate::error::Result;
use crate::normalise::patient_normalise;
use crate::statistics::{
    DailyStatistics, PatientSummary, daily_max, daily_mean, daily_min, data_max, data_mean,
    data_min,
};
use crate::table::InflammationTable;

/// One patient's readings, in day order.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: usize,
    pub data: Array1<f64>,
}

impl Patient {
    pub fn new(id: usize, data: impl Into<Array1<f64>>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }

    pub fn data_mean(&self) -> f64 {
        data_mean(self.data.view())
    }

    pub fn data_max(&self) -> f64 {
        data_max(self.data.view())
    }

    pub fn data_min(&self) -> f64 {
        data_min(self.data.view())
    }

    pub fn summary(&self) -> PatientSummary {
        PatientSummary::from_readings(self.id, self.data.view())
    }
}

/// A named trial: an identifier plus its full inflammation table.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub id: String,
    pub table: InflammationTable,
}

impl Trial {
    pub fn new(id: impl Into<String>, table: InflammationTable) -> Self {
        Self {
            id: id.into(),
            table,
        }
    }

    pub fn daily_mean(&self) -> Array1<f64> {
        daily_mean(&self.table)
    }

    pub fn daily_max(&self) -> Array1<f64> {
        daily_max(&self.table)
    }

    pub fn daily_min(&self) -> Array1<f64> {
        daily_min(&self.table)
    }

    pub fn daily_statistics(&self) -> DailyStatistics {
        DailyStatistics::compute(&self.table)
    }

    pub fn patient_normalise(&self) -> Result<InflammationTable> {
        patient_normalise(&self.table)
    }

    /// Patient record for a row; negative or past-the-end indices fail.
    pub fn patient(&self, index: isize) -> Result<Patient> {
        self.table.patient(index)
    }
}
