use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

pub const YEAR_MIN: i64 = 1900;
pub const YEAR_MAX: i64 = 2026;
pub const RATE_MIN: f64 = 0.0;
pub const RATE_MAX: f64 = 10.0;
pub const DEFAULT_RATE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Crime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
            Genre::Crime => "Crime",
        }
    }

    /// Exact-match lookup, as used by input validation.
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|genre| genre.name() == name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: Url,
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Case-insensitive match of a genre name against the record's genre list.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre
            .iter()
            .any(|genre| genre.name().eq_ignore_ascii_case(name))
    }

    /// Shallow merge: present patch fields override, absent fields keep
    /// their prior values. The merged whole is not re-validated.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}

/// A fully validated movie that does not yet carry a server-generated id.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: Url,
    pub genre: Vec<Genre>,
}

impl NewMovie {
    pub fn into_movie(self, id: Uuid) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rate: self.rate,
            poster: self.poster,
            genre: self.genre,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rate: Option<f64>,
    pub poster: Option<Url>,
    pub genre: Option<Vec<Genre>>,
}
