use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod title;

pub use title::{
    CastMember, ContentDetail, Credits, ImageRef, Images, Recommendations, Video, Videos,
};

/// Placeholder used when the provider returns neither a title nor a name
pub const UNTITLED: &str = "Untitled";

/// Provider content kind; selects both the genre table and the resource path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
}

impl ContentType {
    /// Parses a user-supplied type, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" => Some(ContentType::Movie),
            "tv" => Some(ContentType::Tv),
            _ => None,
        }
    }

    /// Lenient parse used by detail lookups: anything that is not `tv` is a movie
    pub fn parse_or_movie(value: Option<&str>) -> Self {
        match value.and_then(Self::parse) {
            Some(ContentType::Tv) => ContentType::Tv,
            _ => ContentType::Movie,
        }
    }

    /// Provider resource path segment
    pub fn resource(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Tv => "tv",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource())
    }
}

/// What the user asked to browse. Animation is a sub-classification of movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseCategory {
    Movie,
    Tv,
    Animation,
}

impl BrowseCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" => Some(BrowseCategory::Movie),
            "tv" => Some(BrowseCategory::Tv),
            "animation" => Some(BrowseCategory::Animation),
            _ => None,
        }
    }

    /// Content type whose genre table validates this category
    pub fn content_type(&self) -> ContentType {
        match self {
            BrowseCategory::Tv => ContentType::Tv,
            BrowseCategory::Movie | BrowseCategory::Animation => ContentType::Movie,
        }
    }
}

/// Sort order sent with every discover request
pub const SORT_POPULARITY_DESC: &str = "popularity.desc";

/// Provider-agnostic discover request, built fresh per call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoverQuery {
    pub resource: ContentType,
    /// Genre ids combined with "any of" semantics, in insertion order, no duplicates
    pub include_genre_ids: Vec<u32>,
    pub exclude_genre_ids: Vec<u32>,
    /// Application-level page, 1-indexed
    pub requested_page: u32,
    pub sort_by: &'static str,
}

/// One item of a listing, normalized from the provider's snake_case shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub release_date: Option<String>,
}

/// One application page of discover results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResult {
    pub page: u32,
    pub results: Vec<ContentSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// A page of any TMDB listing endpoint (discover, recommendations)
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Listing item. Movies carry `title`/`release_date`, series `name`/`first_air_date`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TmdbListItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

/// Picks the display title for a content type, falling back to the other field
/// and finally to [`UNTITLED`]
pub fn display_title(
    content_type: ContentType,
    title: Option<String>,
    name: Option<String>,
) -> String {
    let (preferred, other) = match content_type {
        ContentType::Movie => (title, name),
        ContentType::Tv => (name, title),
    };
    preferred
        .filter(|t| !t.trim().is_empty())
        .or(other.filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// First four characters of a provider date, if there are that many
pub fn release_year(date: Option<&str>) -> Option<String> {
    let date = date?.trim();
    if date.chars().count() < 4 {
        return None;
    }
    Some(date.chars().take(4).collect())
}

impl TmdbListItem {
    pub fn into_summary(self, content_type: ContentType) -> ContentSummary {
        let release_date = match content_type {
            ContentType::Movie => self.release_date.or(self.first_air_date),
            ContentType::Tv => self.first_air_date.or(self.release_date),
        }
        .filter(|d| !d.is_empty());

        ContentSummary {
            id: self.id,
            title: display_title(content_type, self.title, self.name),
            overview: self.overview,
            poster_path: self.poster_path,
            vote_average: self.vote_average,
            release_date,
        }
    }
}
