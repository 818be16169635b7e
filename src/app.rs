use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    application::dto::MessageResponse,
    config::AppConfig,
    interface::http::movies_handler::{
        create_movie, delete_movie, get_movie, healthcheck, list_movies, update_movie,
    },
    state::AppState,
};

pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let allowed_origins = Arc::new(config.allowed_origins.clone());

    Router::new()
        .route("/health", get(healthcheck))
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        // Outermost layer: a declared origin outside the allow-list is
        // answered here, before routing or any handler runs.
        .layer(middleware::from_fn_with_state(
            allowed_origins,
            reject_disallowed_origin,
        ))
        .with_state(state)
}

async fn reject_disallowed_origin(
    State(allowed): State<Arc<Vec<HeaderValue>>>,
    request: Request,
    next: Next,
) -> Response {
    let origin_allowed = match request.headers().get(header::ORIGIN) {
        // No declared origin: non-browser or same-origin tooling.
        None => true,
        Some(origin) => allowed.iter().any(|candidate| candidate == origin),
    };

    if origin_allowed {
        return next.run(request).await;
    }

    warn!(origin = ?request.headers().get(header::ORIGIN), "rejected cross-origin request");
    (
        StatusCode::FORBIDDEN,
        Json(MessageResponse {
            message: "Not allowed by CORS",
        }),
    )
        .into_response()
}
