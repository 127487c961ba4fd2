use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, CatalogError},
    middleware::request_id::RequestId,
    models::{ContentDetail, Credits, DiscoverResult, Images, Recommendations, Videos},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct DiscoverParams {
    #[serde(rename = "type")]
    content_type: Option<String>,
    genre: Option<u32>,
    page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct MoodParams {
    mood: Option<String>,
    page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TypeParams {
    #[serde(rename = "type")]
    content_type: Option<String>,
}

/// Handler for genre browsing: `?type=movie|tv|animation&genre=<id>&page=<n>`
pub async fn discover(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<DiscoverParams>, QueryRejection>,
) -> AppResult<Json<DiscoverResult>> {
    let Query(params) = query?;
    let content_type = params
        .content_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput(
                "Parameter 'type' is required. Available values: movie, tv, animation".to_string(),
            )
        })?;
    let genre = params.genre.ok_or(CatalogError::MissingGenre)?;
    let page = params.page.unwrap_or(1);

    tracing::info!(
        request_id = %request_id,
        content_type = %content_type,
        genre,
        page,
        "Processing discover request"
    );

    let result = state.catalog.discover(&content_type, genre, page).await?;
    Ok(Json(result))
}

/// Handler for mood browsing: `?mood=<key>&page=<n>`
pub async fn discover_by_mood(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<MoodParams>, QueryRejection>,
) -> AppResult<Json<DiscoverResult>> {
    let Query(params) = query?;
    let mood = params.mood.unwrap_or_default();
    let page = params.page.unwrap_or(1);

    tracing::info!(
        request_id = %request_id,
        mood = %mood,
        page,
        "Processing mood discover request"
    );

    let result = state.catalog.discover_by_mood(&mood, page).await?;
    Ok(Json(result))
}

pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    query: Result<Query<TypeParams>, QueryRejection>,
) -> AppResult<Json<ContentDetail>> {
    let Query(params) = query?;
    let details = state
        .catalog
        .details(params.content_type.as_deref(), id)
        .await?;
    Ok(Json(details))
}

pub async fn credits(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    query: Result<Query<TypeParams>, QueryRejection>,
) -> AppResult<Json<Credits>> {
    let Query(params) = query?;
    let credits = state
        .catalog
        .credits(params.content_type.as_deref(), id)
        .await?;
    Ok(Json(credits))
}

pub async fn videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    query: Result<Query<TypeParams>, QueryRejection>,
) -> AppResult<Json<Videos>> {
    let Query(params) = query?;
    let videos = state
        .catalog
        .videos(params.content_type.as_deref(), id)
        .await?;
    Ok(Json(videos))
}

pub async fn images(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    query: Result<Query<TypeParams>, QueryRejection>,
) -> AppResult<Json<Images>> {
    let Query(params) = query?;
    let images = state
        .catalog
        .images(params.content_type.as_deref(), id)
        .await?;
    Ok(Json(images))
}

pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    query: Result<Query<TypeParams>, QueryRejection>,
) -> AppResult<Json<Recommendations>> {
    let Query(params) = query?;
    let recommendations = state
        .catalog
        .recommendations(params.content_type.as_deref(), id)
        .await?;
    Ok(Json(recommendations))
}
