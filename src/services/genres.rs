//! Static TMDB genre tables for movies and series.
//!
//! Genre ids are only meaningful within their content type: `10759` exists
//! for series only, `28` for movies only, while `16` exists in both.

use serde::Serialize;

use crate::models::ContentType;

/// TMDB id of the Animation genre (shared by the movie and tv tables)
pub const ANIMATION_GENRE_ID: u32 = 16;

/// A catalog genre, scoped to one content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: u32,
    pub name: &'static str,
    #[serde(skip)]
    pub content_type: ContentType,
}

const fn movie(id: u32, name: &'static str) -> Genre {
    Genre {
        id,
        name,
        content_type: ContentType::Movie,
    }
}

const fn tv(id: u32, name: &'static str) -> Genre {
    Genre {
        id,
        name,
        content_type: ContentType::Tv,
    }
}

pub const MOVIE_GENRES: &[Genre] = &[
    movie(28, "Action"),
    movie(12, "Adventure"),
    movie(16, "Animation"),
    movie(35, "Comedy"),
    movie(80, "Crime"),
    movie(99, "Documentary"),
    movie(18, "Drama"),
    movie(10751, "Family"),
    movie(14, "Fantasy"),
    movie(36, "History"),
    movie(27, "Horror"),
    movie(10402, "Music"),
    movie(9648, "Mystery"),
    movie(10749, "Romance"),
    movie(878, "Science Fiction"),
    movie(53, "Thriller"),
    movie(10770, "TV Movie"),
    movie(10752, "War"),
    movie(37, "Western"),
];

pub const TV_GENRES: &[Genre] = &[
    tv(10759, "Action & Adventure"),
    tv(16, "Animation"),
    tv(35, "Comedy"),
    tv(80, "Crime"),
    tv(99, "Documentary"),
    tv(18, "Drama"),
    tv(10751, "Family"),
    tv(10762, "Kids"),
    tv(9648, "Mystery"),
    tv(10763, "News"),
    tv(10764, "Reality"),
    tv(10765, "Sci-Fi & Fantasy"),
    tv(10766, "Soap"),
    tv(10767, "Talk"),
    tv(10768, "War & Politics"),
    tv(37, "Western"),
];

/// All genres defined for a content type, in display order
pub fn genres_for(content_type: ContentType) -> &'static [Genre] {
    match content_type {
        ContentType::Movie => MOVIE_GENRES,
        ContentType::Tv => TV_GENRES,
    }
}

/// True iff `content_type` names a known type after trimming, ignoring case
pub fn validate_content_type(content_type: &str) -> bool {
    ContentType::parse(content_type).is_some()
}

/// True iff `genre_id` exists in the table of the (normalized) content type
pub fn validate_genre(content_type: &str, genre_id: u32) -> bool {
    genre_name(content_type, genre_id).is_some()
}

/// Name of `genre_id` under `content_type`, absent for unknown types or ids
pub fn genre_name(content_type: &str, genre_id: u32) -> Option<&'static str> {
    let content_type = ContentType::parse(content_type)?;
    find_genre(content_type, genre_id).map(|g| g.name)
}

pub fn find_genre(content_type: ContentType, genre_id: u32) -> Option<&'static Genre> {
    genres_for(content_type).iter().find(|g| g.id == genre_id)
}
