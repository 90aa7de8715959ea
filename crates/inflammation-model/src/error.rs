//! Error types for the inflammation model.

use thiserror::Error;

/// Errors raised by table construction, row selection and normalisation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A negative reading reached normalisation.
    #[error(
        "inflammation values should not be negative: found {value} for patient {row} on day {column}"
    )]
    InvalidMeasurement { row: usize, column: usize, value: f64 },

    /// The input is not a well-formed rectangular table.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Patient selection outside `[0, len)`.
    #[error("patient index {index} out of range for a table of {len} patients")]
    IndexOutOfRange { index: isize, len: usize },
}

/// Shape violations detected when a table is built.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("inflammation table needs at least one patient and one day, got {rows}x{columns}")]
    Empty { rows: usize, columns: usize },

    #[error("ragged inflammation table: row {row} has {found} readings, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid table layout: {0}")]
    Layout(#[from] ndarray::ShapeError),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::IndexOutOfRange { index: -1, len: 3 };
        assert_eq!(
            err.to_string(),
            "patient index -1 out of range for a table of 3 patients"
        );
    }

    #[test]
    fn test_shape_error_is_transparent() {
        let err: ModelError = ShapeError::RaggedRow {
            row: 2,
            expected: 3,
            found: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "ragged inflammation table: row 2 has 2 readings, expected 3"
        );
    }
}
