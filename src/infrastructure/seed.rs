use anyhow::{Context, Result};

use crate::domain::movie::Movie;

static SEED_JSON: &str = include_str!("../../data/movies.json");

/// Initial collection, embedded at compile time. A malformed dataset is a
/// startup error rather than an empty store.
pub fn initial_movies() -> Result<Vec<Movie>> {
    serde_json::from_str(SEED_JSON).context("data/movies.json does not match the movie schema")
}
