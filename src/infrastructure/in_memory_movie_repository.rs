use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        errors::DomainError,
        movie::{Movie, MoviePatch},
    },
    infrastructure::MovieRepository,
};

/// Process-lifetime movie store. A `Vec` keeps insertion order, which is
/// also the order GET /movies serves. Each scan-then-mutate sequence runs
/// under a single write guard.
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn insert(&self, movie: Movie) -> Result<Movie, DomainError> {
        self.movies.write().await.push(movie.clone());
        Ok(movie)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Movie>, DomainError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|movie| movie.id == id).cloned())
    }

    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>, DomainError> {
        let movies = self.movies.read().await;
        let filtered = match genre {
            Some(name) => movies
                .iter()
                .filter(|movie| movie.has_genre(name))
                .cloned()
                .collect(),
            None => movies.clone(),
        };
        Ok(filtered)
    }

    async fn update(&self, id: Uuid, patch: MoviePatch) -> Result<Option<Movie>, DomainError> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|movie| movie.id == id) else {
            return Ok(None);
        };

        movie.apply(patch);
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut movies = self.movies.write().await;
        let Some(index) = movies.iter().position(|movie| movie.id == id) else {
            return Ok(false);
        };

        // Vec::remove shifts the tail left, preserving the order of the
        // remaining records.
        movies.remove(index);
        Ok(true)
    }
}
