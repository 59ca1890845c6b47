//! Database access object over an embedded SQLite connection.
//!
//! Rows are materialized as [`serde_json::Value`] objects keyed by column
//! name, so callers (mostly the fixture tests) can deep-compare result sets
//! against `json!` literals. Typed variants decode through serde instead.

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use std::path::Path;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::fixture;

/// Handle bound to one SQLite database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an in-memory database materialized at the named fixture stage.
    ///
    /// Applies every seed script up to and including `stage`, so the handle
    /// starts out in the same state a prior run would have left behind.
    pub fn from_existing(stage: &str) -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        fixture::seed_connection(&conn, stage)?;
        Ok(Self { conn })
    }

    /// Open an existing database file.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Wrap an already-open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Access the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute a query expected to produce a single row.
    ///
    /// Returns the first row as a JSON object; [`DbError::NotFound`] when the
    /// result set is empty.
    pub fn select_single_row(&self, sql: &str) -> DbResult<Value> {
        let mut rows = self.run_query(sql)?;
        if rows.is_empty() {
            return Err(DbError::not_found(format!("no rows for query: {sql}")));
        }
        Ok(rows.swap_remove(0))
    }

    /// Execute a query and return every row as a JSON array.
    pub fn select_multiple_rows(&self, sql: &str) -> DbResult<Value> {
        Ok(Value::Array(self.run_query(sql)?))
    }

    /// Execute a single-row query and decode the row into `T`.
    pub fn select_single_row_as<T: DeserializeOwned>(&self, sql: &str) -> DbResult<T> {
        let row = self.select_single_row(sql)?;
        serde_json::from_value(row).map_err(|e| DbError::decode("<row>", e.to_string()))
    }

    /// Execute a query and decode every row into `T`.
    pub fn select_multiple_rows_as<T: DeserializeOwned>(&self, sql: &str) -> DbResult<Vec<T>> {
        self.run_query(sql)?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| DbError::decode("<row>", e.to_string())))
            .collect()
    }

    /// Execute a non-SELECT statement, returning the affected row count.
    pub fn execute(&self, sql: &str) -> DbResult<usize> {
        debug!(sql, "executing statement");
        Ok(self.conn.execute(sql, [])?)
    }

    fn run_query(&self, sql: &str) -> DbResult<Vec<Value>> {
        debug!(sql, "executing query");
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut out = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut object = Map::with_capacity(columns.len());
            for (idx, column) in columns.iter().enumerate() {
                object.insert(column.clone(), value_ref_to_json(column, row.get_ref(idx)?)?);
            }
            out.push(Value::Object(object));
        }
        Ok(out)
    }
}

fn value_ref_to_json(column: &str, value: ValueRef<'_>) -> DbResult<Value> {
    match value {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(i) => Ok(Value::Number(Number::from(i))),
        ValueRef::Real(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| DbError::decode(column, "non-finite REAL value")),
        ValueRef::Text(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => Ok(Value::String(s.to_string())),
            Err(e) => Err(DbError::decode(column, e.to_string())),
        },
        ValueRef::Blob(_) => Err(DbError::decode(column, "BLOB columns are not supported")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_row_not_found() {
        let db = Database::from_existing(fixture::LATEST_STAGE).unwrap();
        let err = db
            .select_single_row("SELECT * from actors WHERE id = 9999")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_bad_sql_surfaces_sqlite_error() {
        let db = Database::from_existing(fixture::LATEST_STAGE).unwrap();
        let err = db.select_multiple_rows("SELECT * from no_such_table").unwrap_err();
        assert!(matches!(err, DbError::Sqlite(_)));
    }

    #[test]
    fn test_rows_come_back_as_json_objects() {
        let db = Database::from_existing(fixture::LATEST_STAGE).unwrap();
        let row = db
            .select_single_row("SELECT id, genre from genres WHERE id = 1")
            .unwrap();
        assert_eq!(row, json!({ "id": 1, "genre": "Drama" }));
    }

    #[test]
    fn test_typed_decode() {
        #[derive(serde::Deserialize)]
        struct GenreRow {
            id: i64,
            genre: String,
        }

        let db = Database::from_existing(fixture::LATEST_STAGE).unwrap();
        let rows: Vec<GenreRow> = db
            .select_multiple_rows_as("SELECT * from genres")
            .unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].genre, "Drama");
    }

    #[test]
    fn test_typed_single_row_decode() {
        #[derive(serde::Deserialize)]
        struct CountRow {
            c: i64,
        }

        let db = Database::from_existing(fixture::LATEST_STAGE).unwrap();
        let row: CountRow = db
            .select_single_row_as("SELECT count (*) as c from movies")
            .unwrap();
        assert_eq!(row.c, 11);
    }

    #[test]
    fn test_wraps_existing_connection() {
        let conn = Connection::open_in_memory().unwrap();
        fixture::seed_connection(&conn, "02").unwrap();

        let db = Database::from_connection(conn);
        let count: i64 = db
            .conn()
            .query_row("SELECT count (*) as c from directors", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 7);
    }

    #[test]
    fn test_execute_affects_rows() {
        let db = Database::from_existing(fixture::LATEST_STAGE).unwrap();
        let affected = db
            .execute("DELETE FROM movie_ratings WHERE user_id = 7")
            .unwrap();
        assert_eq!(affected, 4);
    }
}
