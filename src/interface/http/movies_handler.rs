use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    application::dto::{HealthResponse, ListMoviesQuery, MessageResponse, MoviePayload},
    domain::movie::Movie,
    interface::http::api_error::ApiResult,
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.movie_service.list_movies(query.genre).await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.movie_service.get_movie(&id).await?;
    Ok(Json(movie))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<MoviePayload>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let created = state.movie_service.create_movie(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MoviePayload>,
) -> ApiResult<Json<Movie>> {
    let updated = state.movie_service.update_movie(&id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.movie_service.delete_movie(&id).await?;
    Ok(Json(MessageResponse {
        message: "Movie deleted",
    }))
}
