//! Table names of the movie-catalog schema.
//!
//! These are shared read-only constants; every builder in [`crate::select`]
//! interpolates against them rather than spelling table names inline.

pub const ACTORS: &str = "actors";
pub const DIRECTORS: &str = "directors";
pub const GENRES: &str = "genres";
pub const KEYWORDS: &str = "keywords";
pub const MOVIES: &str = "movies";
pub const MOVIE_RATINGS: &str = "movie_ratings";
pub const PRODUCTION_COMPANIES: &str = "production_companies";

// Many-to-many join tables.
pub const MOVIE_ACTORS: &str = "movie_actors";
pub const MOVIE_DIRECTORS: &str = "movie_directors";
pub const MOVIE_GENRES: &str = "movie_genres";
pub const MOVIE_KEYWORDS: &str = "movie_keywords";
pub const MOVIE_PRODUCTION_COMPANIES: &str = "movie_production_companies";

/// Every table in the schema, in dependency order.
pub const ALL_TABLES: &[&str] = &[
    ACTORS,
    DIRECTORS,
    GENRES,
    KEYWORDS,
    PRODUCTION_COMPANIES,
    MOVIES,
    MOVIE_ACTORS,
    MOVIE_DIRECTORS,
    MOVIE_GENRES,
    MOVIE_KEYWORDS,
    MOVIE_PRODUCTION_COMPANIES,
    MOVIE_RATINGS,
];
