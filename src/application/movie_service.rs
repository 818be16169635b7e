use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::dto::MoviePayload,
    domain::{errors::DomainError, movie::Movie},
    infrastructure::MovieRepository,
};

const NOT_FOUND: &str = "Movie not found";

#[derive(Clone)]
pub struct MovieService {
    repository: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_movies(&self, genre: Option<String>) -> Result<Vec<Movie>, DomainError> {
        self.repository.list(genre.as_deref()).await
    }

    pub async fn get_movie(&self, raw_id: &str) -> Result<Movie, DomainError> {
        let Some(id) = parse_movie_id(raw_id) else {
            return Err(DomainError::not_found(NOT_FOUND));
        };

        let Some(movie) = self.repository.get_by_id(id).await? else {
            return Err(DomainError::not_found(NOT_FOUND));
        };
        Ok(movie)
    }

    pub async fn create_movie(&self, payload: MoviePayload) -> Result<Movie, DomainError> {
        let new_movie = payload.validate_full()?;
        let movie = new_movie.into_movie(Uuid::new_v4());
        self.repository.insert(movie).await
    }

    /// Validation runs before the id lookup, so a bad body answers 400 even
    /// for an unknown id.
    pub async fn update_movie(
        &self,
        raw_id: &str,
        payload: MoviePayload,
    ) -> Result<Movie, DomainError> {
        let patch = payload.validate_partial()?;

        let Some(id) = parse_movie_id(raw_id) else {
            return Err(DomainError::not_found(NOT_FOUND));
        };

        let Some(updated) = self.repository.update(id, patch).await? else {
            return Err(DomainError::not_found(NOT_FOUND));
        };
        Ok(updated)
    }

    pub async fn delete_movie(&self, raw_id: &str) -> Result<(), DomainError> {
        let Some(id) = parse_movie_id(raw_id) else {
            return Err(DomainError::not_found(NOT_FOUND));
        };

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        Ok(())
    }
}

// Ids are always server-generated UUIDs, so a path segment that does not
// parse as one can match no record and maps to the same not-found answer.
fn parse_movie_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
