use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures talking to the catalog provider
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse provider response: {0}")]
    Decode(String),

    #[error("Provider has no such resource")]
    NotFound,
}

/// Errors surfaced by the catalog core
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Invalid content type '{0}'. Available values: movie, tv, animation")]
    InvalidContentType(String),

    #[error("Parameter 'genre' (TMDB genre id) is required")]
    MissingGenre,

    #[error("Invalid genre {genre_id} for type '{content_type}'")]
    InvalidGenre { content_type: String, genre_id: u32 },

    #[error("Unknown mood '{}'. Available values: {}", .mood, .available.join(", "))]
    UnknownMood {
        mood: String,
        available: Vec<&'static str>,
    },

    #[error("Page must be at least 1")]
    InvalidPage,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl CatalogError {
    /// True for failures detected before any provider call
    pub fn is_validation(&self) -> bool {
        !matches!(self, CatalogError::Provider(_))
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        if err.is_validation() {
            return AppError::InvalidInput(err.to_string());
        }
        match err {
            CatalogError::Provider(ProviderError::NotFound) => {
                AppError::NotFound("No details found for the given id".to_string())
            }
            other => AppError::ExternalApi(other.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub type CatalogResult<T> = Result<T, CatalogError>;
