//! # sql-movies
//!
//! SQL string builders and a staged SQLite fixture for a movie-catalog schema.
//!
//! ## What this is
//!
//! - **SQL explicit**: every query is a literal SQL string; the builders in
//!   [`select`] only interpolate scalar identifiers into fixed statement
//!   shapes (no escaping, no parameterization — see the module docs).
//! - **Fixture-backed**: [`fixture`] embeds numbered seed scripts that
//!   materialize known catalog states, so expectation tests can assert literal
//!   result sets.
//! - **Thin access layer**: [`db::Database`] wraps a `rusqlite` connection and
//!   returns rows as `serde_json` values for deep-equality comparison, or
//!   decoded into structs via serde.
//!
//! ## Example
//!
//! ```
//! use sql_movies::{Database, fixture, select};
//! use serde_json::json;
//!
//! let db = Database::from_existing(fixture::LATEST_STAGE)?;
//! let row = db.select_single_row(&select::select_actor_by_name("Bill Murray"))?;
//! assert_eq!(row, json!({ "id": 14, "full_name": "Bill Murray" }));
//! # Ok::<(), sql_movies::DbError>(())
//! ```

pub mod db;
pub mod error;
pub mod fixture;
pub mod select;
pub mod tables;

pub use db::Database;
pub use error::{DbError, DbResult};
