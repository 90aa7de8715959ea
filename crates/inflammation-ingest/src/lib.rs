//! Inflammation data ingestion.
//!
//! Loads headerless comma-separated files of daily readings (one patient per
//! line) into an [`InflammationTable`](inflammation_model::InflammationTable).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use inflammation_ingest::{load_csv, load_trial};
//!
//! let table = load_csv(Path::new("data/inflammation-01.csv"))?;
//! let trial = load_trial(Path::new("data/inflammation-01.csv"), "trial-01")?;
//! ```

mod csv_table;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{load_csv, load_trial, read_table_from_reader};
