//! Connection setup and arbitrary query execution.
//!
//! Connections are owned by the caller. [`query_database`] only borrows one
//! and leaves it open, so several queries can share a connection and the
//! caller decides when to close it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, Row, TypeInfo, ValueRef};
use tracing::debug;

use crate::error::{DbError, Result};

/// One column value of a result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(value) => write!(f, "{value}"),
            SqlValue::Real(value) => write!(f, "{value}"),
            SqlValue::Text(value) => f.write_str(value),
            SqlValue::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

/// A result row, columns in select order.
pub type Record = Vec<SqlValue>;

/// Open (creating if needed) the SQLite database file at `path`.
pub async fn connect_to_database(path: impl AsRef<Path>) -> Result<SqliteConnection> {
    let path = path.as_ref();
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await
        .map_err(|source| DbError::Connect {
            path: path.to_path_buf(),
            source,
        })
}

/// Close a connection opened with [`connect_to_database`].
pub async fn close_database(connection: SqliteConnection) -> Result<()> {
    connection.close().await?;
    Ok(())
}

/// Run `sql` and return every result row.
///
/// # Errors
///
/// Returns [`DbError::ConnectionRequired`] when no connection is supplied.
pub async fn query_database(
    sql: &str,
    connection: Option<&mut SqliteConnection>,
) -> Result<Vec<Record>> {
    let Some(connection) = connection else {
        return Err(DbError::ConnectionRequired);
    };
    let rows = sqlx::query(sql).fetch_all(&mut *connection).await?;
    debug!(rows = rows.len(), "query returned rows");
    rows.iter().map(decode_row).collect()
}

/// File backing the connection's `main` schema; `None` for in-memory databases.
pub async fn database_file(connection: &mut SqliteConnection) -> Result<Option<PathBuf>> {
    let rows = sqlx::query("PRAGMA database_list")
        .fetch_all(&mut *connection)
        .await?;
    for row in rows {
        let name: String = row.try_get("name")?;
        if name == "main" {
            let file: String = row.try_get("file")?;
            return Ok((!file.is_empty()).then(|| PathBuf::from(file)));
        }
    }
    Ok(None)
}

fn decode_row(row: &SqliteRow) -> Result<Record> {
    (0..row.len()).map(|column| decode_value(row, column)).collect()
}

fn decode_value(row: &SqliteRow, column: usize) -> Result<SqlValue> {
    let raw = row.try_get_raw(column)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let value = match raw.type_info().name() {
        "INTEGER" => SqlValue::Integer(row.try_get(column)?),
        "REAL" => SqlValue::Real(row.try_get(column)?),
        "TEXT" => SqlValue::Text(row.try_get(column)?),
        "BLOB" => SqlValue::Blob(row.try_get(column)?),
        other => {
            return Err(DbError::UnsupportedType {
                column,
                type_name: other.to_string(),
            });
        }
    };
    Ok(value)
}
