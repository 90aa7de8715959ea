//! Inflammation data model.
//!
//! Patients' readings are held in an [`InflammationTable`]: each row is one
//! patient, each column one day. This crate provides the daily reductions
//! (mean, max, min across patients), the matching per-patient reductions, and
//! per-patient normalisation against each patient's peak reading.
//!
//! # Example
//!
//! ```
//! use inflammation_model::{InflammationTable, daily_mean, patient_normalise};
//!
//! let table = InflammationTable::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! assert_eq!(daily_mean(&table).to_vec(), vec![2.0, 3.0]);
//!
//! let normalised = patient_normalise(&table)?;
//! assert_eq!(normalised.to_rows(), vec![vec![0.5, 1.0], vec![0.75, 1.0]]);
//! # Ok::<(), inflammation_model::ModelError>(())
//! ```

#![deny(unsafe_code)]

mod error;
mod normalise;
mod patient;
mod statistics;
mod table;

pub use error::{ModelError, Result, ShapeError};
pub use normalise::patient_normalise;
pub use patient::{Patient, Trial};
pub use statistics::{
    DailyStatistics, PatientSummary, daily_max, daily_mean, daily_min, data_max, data_mean,
    data_min, patient_summaries,
};
pub use table::InflammationTable;
