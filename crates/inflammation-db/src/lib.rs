//! SQLite query helper.
//!
//! Opens SQLite files and runs arbitrary SQL, returning each result row as an
//! ordered [`Record`]. The caller owns the connection for its whole lifetime.

mod error;
mod query;

pub use error::{DbError, Result};
pub use query::{
    Record, SqlValue, close_database, connect_to_database, database_file, query_database,
};
pub use sqlx::sqlite::SqliteConnection;
