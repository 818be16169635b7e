use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    movie::{Movie, MoviePatch},
};

pub mod in_memory_movie_repository;
pub mod seed;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn insert(&self, movie: Movie) -> Result<Movie, DomainError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Movie>, DomainError>;
    /// Returns records in collection order, optionally filtered by a
    /// case-insensitive genre name.
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>, DomainError>;
    async fn update(&self, id: Uuid, patch: MoviePatch) -> Result<Option<Movie>, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
