use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::ContentType,
    services::{
        genres::{self as genre_catalog, Genre},
        moods as mood_catalog,
    },
};

#[derive(Debug, Deserialize)]
pub struct GenreParams {
    #[serde(rename = "type")]
    content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResponse {
    pub id: &'static str,
    pub genre_ids: &'static [u32],
}

/// Genres available for `?type=movie|tv`
pub async fn genres(
    query: Result<Query<GenreParams>, QueryRejection>,
) -> AppResult<Json<&'static [Genre]>> {
    let Query(params) = query?;
    let content_type = params
        .content_type
        .as_deref()
        .and_then(ContentType::parse)
        .ok_or_else(|| {
            AppError::InvalidInput("Invalid type. Available values: movie, tv".to_string())
        })?;

    Ok(Json(genre_catalog::genres_for(content_type)))
}

/// Supported moods and the genres they expand to
pub async fn moods() -> Json<Vec<MoodResponse>> {
    Json(
        mood_catalog::MOODS
            .iter()
            .map(|m| MoodResponse {
                id: m.id,
                genre_ids: m.genre_ids,
            })
            .collect(),
    )
}
