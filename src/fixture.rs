//! Staged fixture database for the movie catalog.
//!
//! The seed lives in numbered SQL scripts embedded at compile time. A stage
//! name ("01" through "04") identifies the database state after every script
//! up to and including that number has run:
//!
//! - `01` empty schema
//! - `02` actors, directors, genres, keywords, production companies
//! - `03` movies and their join tables
//! - `04` user ratings (the fully seeded catalog)

use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Seed scripts in application order, keyed by stage name.
const STAGES: &[(&str, &str)] = &[
    ("01", include_str!("../fixtures/01_schema.sql")),
    ("02", include_str!("../fixtures/02_people_and_tags.sql")),
    ("03", include_str!("../fixtures/03_movies.sql")),
    ("04", include_str!("../fixtures/04_ratings.sql")),
];

/// The fully seeded stage.
pub const LATEST_STAGE: &str = "04";

/// Names of all known stages, in order.
pub fn stage_names() -> impl Iterator<Item = &'static str> {
    STAGES.iter().map(|(name, _)| *name)
}

/// Apply every seed script up to and including `stage` to a connection.
pub fn seed_connection(conn: &Connection, stage: &str) -> DbResult<()> {
    let position = STAGES
        .iter()
        .position(|(name, _)| *name == stage)
        .ok_or_else(|| DbError::Fixture(format!("unknown fixture stage '{stage}'")))?;

    for (name, script) in STAGES[..=position].iter().copied() {
        debug!(stage = name, "applying fixture script");
        conn.execute_batch(script)?;
    }
    Ok(())
}

/// Materialize a stage as a database file at `path`.
///
/// The file must not already contain the schema; this is meant for fresh
/// snapshot files.
pub fn materialize(stage: &str, path: impl AsRef<Path>) -> DbResult<()> {
    let conn = Connection::open(path)?;
    seed_connection(&conn, stage)
}
