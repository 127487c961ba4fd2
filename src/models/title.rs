use serde::{Deserialize, Serialize};

use super::{display_title, release_year, ContentType};

/// Maximum number of billed cast members returned in credits
pub const CAST_LIMIT: usize = 12;

/// Maximum number of backdrops returned in images
pub const BACKDROP_LIMIT: usize = 12;

/// Full description of a movie or series for the details view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetail {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub release_date: Option<String>,
    pub release_year: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<String>,
    pub certification: Option<String>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub homepage: Option<String>,
    pub spoken_languages: Vec<String>,
    pub production_countries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    pub director: Option<String>,
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Videos {
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub file_path: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Images {
    pub backdrops: Vec<ImageRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub results: Vec<super::ContentSummary>,
}

// ============================================================================
// TMDB Detail Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbNamed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbLanguage {
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Union of the movie and tv detail payloads; unused fields stay at their defaults
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbDetail {
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
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub genres: Vec<TmdbNamed>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub spoken_languages: Vec<TmdbLanguage>,
    #[serde(default)]
    pub production_countries: Vec<TmdbNamed>,
}

impl TmdbDetail {
    pub fn into_detail(self, content_type: ContentType, certification: Option<String>) -> ContentDetail {
        let release_date = match content_type {
            ContentType::Movie => self.release_date,
            ContentType::Tv => self.first_air_date,
        }
        .filter(|d| !d.is_empty());

        let runtime_minutes = match content_type {
            ContentType::Movie => self.runtime.filter(|r| *r > 0),
            ContentType::Tv => self.episode_run_time.first().copied(),
        };

        // TMDB reports unknown money figures as 0
        let (budget, revenue) = match content_type {
            ContentType::Movie => (
                self.budget.filter(|b| *b > 0),
                self.revenue.filter(|r| *r > 0),
            ),
            ContentType::Tv => (None, None),
        };

        ContentDetail {
            id: self.id,
            title: display_title(content_type, self.title, self.name),
            overview: self.overview.filter(|o| !o.is_empty()),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            release_year: release_year(release_date.as_deref()),
            release_date,
            runtime_minutes,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
            certification,
            budget,
            revenue,
            homepage: self.homepage.filter(|h| !h.is_empty()),
            spoken_languages: self
                .spoken_languages
                .into_iter()
                .filter_map(|l| l.english_name.or(l.name))
                .filter(|l| !l.is_empty())
                .collect(),
            production_countries: self
                .production_countries
                .into_iter()
                .map(|c| c.name)
                .collect(),
        }
    }
}

/// `/movie/{id}/release_dates`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbReleaseDates {
    #[serde(default)]
    pub results: Vec<TmdbCountryReleases>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCountryReleases {
    pub iso_3166_1: String,
    #[serde(default)]
    pub release_dates: Vec<TmdbReleaseDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbReleaseDate {
    #[serde(default)]
    pub certification: String,
}

impl TmdbReleaseDates {
    pub fn certification_for(&self, region: &str) -> Option<String> {
        self.results
            .iter()
            .find(|c| c.iso_3166_1.eq_ignore_ascii_case(region))?
            .release_dates
            .iter()
            .map(|r| r.certification.trim())
            .find(|c| !c.is_empty())
            .map(str::to_string)
    }
}

/// `/tv/{id}/content_ratings`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbContentRatings {
    #[serde(default)]
    pub results: Vec<TmdbContentRating>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbContentRating {
    pub iso_3166_1: String,
    #[serde(default)]
    pub rating: String,
}

impl TmdbContentRatings {
    pub fn rating_for(&self, region: &str) -> Option<String> {
        self.results
            .iter()
            .find(|r| r.iso_3166_1.eq_ignore_ascii_case(region))
            .map(|r| r.rating.trim().to_string())
            .filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
}

impl From<TmdbCredits> for Credits {
    fn from(credits: TmdbCredits) -> Self {
        let director = credits
            .crew
            .iter()
            .find(|c| c.job.as_deref() == Some("Director"))
            .map(|c| c.name.clone());

        let mut cast = credits.cast;
        cast.sort_by_key(|c| c.order.unwrap_or(u32::MAX));

        Credits {
            director,
            cast: cast
                .into_iter()
                .take(CAST_LIMIT)
                .map(|c| CastMember {
                    name: c.name,
                    character: c.character.filter(|ch| !ch.is_empty()),
                    profile_path: c.profile_path,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideos {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
}

impl From<TmdbVideos> for Videos {
    fn from(videos: TmdbVideos) -> Self {
        let mut results: Vec<Video> = videos
            .results
            .into_iter()
            .filter(|v| v.site.eq_ignore_ascii_case("youtube") && !v.key.is_empty())
            .map(|v| Video {
                key: v.key,
                name: v.name,
                site: v.site,
                video_type: v.video_type,
            })
            .collect();

        // stable: trailers first, otherwise provider order
        results.sort_by_key(|v| !v.video_type.eq_ignore_ascii_case("trailer"));

        Videos { results }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbImages {
    #[serde(default)]
    pub backdrops: Vec<TmdbImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbImage {
    pub file_path: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl From<TmdbImages> for Images {
    fn from(images: TmdbImages) -> Self {
        Images {
            backdrops: images
                .backdrops
                .into_iter()
                .take(BACKDROP_LIMIT)
                .map(|i| ImageRef {
                    file_path: i.file_path,
                    width: i.width,
                    height: i.height,
                })
                .collect(),
        }
    }
}
