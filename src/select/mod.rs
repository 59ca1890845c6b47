//! SELECT statement builders for the movie-catalog schema.
//!
//! Each builder is a pure function from a scalar identifier to SQL text.
//! String values are single-quoted, numeric values are unquoted, and output is
//! deterministic: the same input always yields the same string.
//!
//! # Safety
//!
//! These builders concatenate their input into the SQL verbatim. Nothing is
//! escaped or parameterized, so a value containing a quote produces malformed
//! SQL (and an adversarial value is an injection). The fixture tests rely on
//! this literal construction; callers outside a trusted test context must not
//! pass untrusted input.

use crate::tables::{
    ACTORS, DIRECTORS, GENRES, KEYWORDS, MOVIES, MOVIE_RATINGS, PRODUCTION_COMPANIES,
};


// ==================== Lookups by name ====================

/// `SELECT * from actors WHERE full_name = '<name>'`
pub fn select_actor_by_name(full_name: &str) -> String {
    format!("SELECT * from {ACTORS} WHERE full_name = '{full_name}'")
}

pub fn select_keyword(keyword: &str) -> String {
    format!("SELECT * from {KEYWORDS} WHERE keyword = '{keyword}'")
}

pub fn select_director(director: &str) -> String {
    format!("SELECT * from {DIRECTORS} WHERE full_Name = '{director}'")
}

pub fn select_genre(genre: &str) -> String {
    format!("SELECT * from {GENRES} WHERE genre = '{genre}'")
}

pub fn select_production_company(company: &str) -> String {
    format!("SELECT * from {PRODUCTION_COMPANIES} WHERE company_name = '{company}'")
}

// ==================== Lookups by id ====================

/// `SELECT * from movies WHERE id = <id>` (numeral unquoted)
pub fn select_movie_by_id(id: i64) -> String {
    format!("SELECT * from {MOVIES} WHERE id = {id}")
}

pub fn select_genre_by_id(id: i64) -> String {
    format!("SELECT * from {GENRES} WHERE id = {id}")
}

pub fn select_director_by_id(id: i64) -> String {
    format!("SELECT * from {DIRECTORS} WHERE id = {id}")
}

pub fn select_actor_by_id(id: i64) -> String {
    format!("SELECT * from {ACTORS} WHERE id = {id}")
}

pub fn select_keyword_by_id(id: i64) -> String {
    format!("SELECT * from {KEYWORDS} WHERE id = {id}")
}

pub fn select_production_company_by_id(id: i64) -> String {
    format!("SELECT * from {PRODUCTION_COMPANIES} WHERE id = {id}")
}

// ==================== Movie lookups by imdb id ====================

pub fn select_movie(imdb_id: &str) -> String {
    format!("SELECT * from {MOVIES} WHERE imdb_id = '{imdb_id}'")
}

pub fn select_movie_id(imdb_id: &str) -> String {
    format!("SELECT id from {MOVIES} WHERE imdb_id = '{imdb_id}'")
}

// ==================== Ratings ====================

pub fn select_ratings_by_user_id(user_id: i64) -> String {
    format!("SELECT * from {MOVIE_RATINGS} WHERE user_Id  = {user_id}")
}

// ==================== Join lookups by movie id ====================

/// Genre names attached to a movie.
pub fn select_genres_by_movie_id(movie_id: i64) -> String {
    format!(
        "select g.genre from movie_genres mg join genres g on g.id = mg.genre_id where mg.movie_id = {movie_id}"
    )
}

pub fn select_actors_by_movie_id(movie_id: i64) -> String {
    format!(
        "select a.full_name from movie_actors ma join actors a on a.id = ma.actor_id where ma.movie_id = {movie_id}"
    )
}

pub fn select_directors_by_movie_id(movie_id: i64) -> String {
    format!(
        "select d.full_name from movie_directors md join directors d on d.id = md.director_id where md.movie_id = {movie_id}"
    )
}

pub fn select_keywords_by_movie_id(movie_id: i64) -> String {
    format!(
        "select k.keyword from movie_keywords mk join keywords k on k.id = mk.keyword_id where mk.movie_id = {movie_id}"
    )
}

pub fn select_production_companies_by_movie_id(movie_id: i64) -> String {
    format!(
        "select pc.company_name from movie_production_companies mpc join production_companies pc on pc.id = mpc.company_id where mpc.movie_id = {movie_id}"
    )
}

// ==================== Generic ====================

/// Row count for any table, aliased as `c`.
pub fn select_count(table: &str) -> String {
    format!("SELECT count (*) as c from {table}")
}
