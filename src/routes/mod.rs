use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::CatalogService,
};

pub mod catalog;
pub mod movies;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(movies::discover))
        .route("/movies/mood", get(movies::discover_by_mood))
        .route("/movies/:id/details", get(movies::details))
        .route("/movies/:id/credits", get(movies::credits))
        .route("/movies/:id/videos", get(movies::videos))
        .route("/movies/:id/images", get(movies::images))
        .route("/movies/:id/recommendations", get(movies::recommendations))
        .route("/genres", get(catalog::genres))
        .route("/moods", get(catalog::moods))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
