//! Database error types.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("a valid database connection is required")]
    ConnectionRequired,

    #[error("failed to open database {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unsupported SQLite type '{type_name}' in column {column}")]
    UnsupportedType { column: usize, type_name: String },
}
