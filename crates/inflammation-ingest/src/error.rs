//! Error types for inflammation data ingestion.

use std::path::PathBuf;

use inflammation_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading readings from CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader itself failed (bad UTF-8, I/O while streaming).
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A field is not a number.
    #[error("invalid reading '{value}' in {path} at line {line}, column {column}")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },

    /// A row has a different number of fields than the first row.
    #[error("ragged row in {path} at line {line}: expected {expected} readings, found {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// CSV file has no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Model Errors ===
    /// The parsed rows could not form a table.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IngestError {
    /// True for the malformed-content variants (as opposed to I/O failures).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Csv { .. } | Self::InvalidNumber { .. } | Self::RaggedRow { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
