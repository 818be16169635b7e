use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    errors::{DomainError, FieldError},
    movie::{DEFAULT_RATE, Genre, MoviePatch, NewMovie, RATE_MAX, RATE_MIN, YEAR_MAX, YEAR_MIN},
};

/// Raw request body for POST and PATCH. Every field is optional so the
/// full and partial validators share one shape; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
}

impl MoviePayload {
    /// Creation-time validation: required fields must be present, `rate`
    /// defaults when absent. Collects every violation, not just the first.
    pub fn validate_full(self) -> Result<NewMovie, DomainError> {
        let mut errors = Vec::new();

        let title = require("title", "Movie title is required", self.title, &mut errors)
            .and_then(|value| check_title(value, &mut errors));
        let year = require("year", "year is required", self.year, &mut errors)
            .and_then(|value| check_year(value, &mut errors));
        let director = require("director", "director is required", self.director, &mut errors);
        let duration = require("duration", "duration is required", self.duration, &mut errors)
            .and_then(|value| check_duration(value, &mut errors));
        let rate = match self.rate {
            Some(value) => check_rate(value, &mut errors),
            None => Some(DEFAULT_RATE),
        };
        let poster = require("poster", "poster is required", self.poster, &mut errors)
            .and_then(|value| check_poster(value, &mut errors));
        let genre = require("genre", "Movie genre is required", self.genre, &mut errors)
            .and_then(|values| check_genre(values, &mut errors));

        if let (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rate),
            Some(poster),
            Some(genre),
        ) = (title, year, director, duration, rate, poster, genre)
        {
            Ok(NewMovie {
                title,
                year,
                director,
                duration,
                rate,
                poster,
                genre,
            })
        } else {
            Err(DomainError::validation(errors))
        }
    }

    /// Update-time validation: nothing is required and an empty body is a
    /// valid empty patch, but present fields keep their full constraints.
    pub fn validate_partial(self) -> Result<MoviePatch, DomainError> {
        let mut errors = Vec::new();

        let patch = MoviePatch {
            title: self
                .title
                .and_then(|value| check_title(value, &mut errors)),
            year: self.year.and_then(|value| check_year(value, &mut errors)),
            director: self.director,
            duration: self
                .duration
                .and_then(|value| check_duration(value, &mut errors)),
            rate: self.rate.and_then(|value| check_rate(value, &mut errors)),
            poster: self
                .poster
                .and_then(|value| check_poster(value, &mut errors)),
            genre: self
                .genre
                .and_then(|values| check_genre(values, &mut errors)),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(DomainError::validation(errors))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesQuery {
    pub genre: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn require<T>(
    field: &'static str,
    message: &'static str,
    value: Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(field, message));
    }
    value
}

fn check_title(value: String, errors: &mut Vec<FieldError>) -> Option<String> {
    if value.trim().is_empty() {
        errors.push(FieldError::new("title", "Movie title must not be empty"));
        return None;
    }
    Some(value)
}

fn check_year(value: i64, errors: &mut Vec<FieldError>) -> Option<i64> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&value) {
        errors.push(FieldError::new(
            "year",
            format!("year must be between {YEAR_MIN} and {YEAR_MAX}"),
        ));
        return None;
    }
    Some(value)
}

fn check_duration(value: i64, errors: &mut Vec<FieldError>) -> Option<u32> {
    match u32::try_from(value) {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => {
            errors.push(FieldError::new(
                "duration",
                "duration must be a positive integer",
            ));
            None
        }
    }
}

fn check_rate(value: f64, errors: &mut Vec<FieldError>) -> Option<f64> {
    if !(RATE_MIN..=RATE_MAX).contains(&value) {
        errors.push(FieldError::new(
            "rate",
            format!("rate must be between {RATE_MIN} and {RATE_MAX}"),
        ));
        return None;
    }
    Some(value)
}

fn check_poster(value: String, errors: &mut Vec<FieldError>) -> Option<Url> {
    match value.parse::<Url>() {
        Ok(url) => Some(url),
        Err(_) => {
            errors.push(FieldError::new("poster", "Poster must be a valid URL"));
            None
        }
    }
}

fn check_genre(values: Vec<String>, errors: &mut Vec<FieldError>) -> Option<Vec<Genre>> {
    if values.is_empty() {
        errors.push(FieldError::new("genre", "genre must not be empty"));
        return None;
    }

    let mut genres = Vec::with_capacity(values.len());
    let mut all_known = true;
    for value in values {
        match Genre::from_name(&value) {
            Some(genre) => genres.push(genre),
            None => {
                errors.push(FieldError::new(
                    "genre",
                    format!("'{value}' is not a recognized genre"),
                ));
                all_known = false;
            }
        }
    }

    all_known.then_some(genres)
}
