pub mod dto;
pub mod movie_service;
