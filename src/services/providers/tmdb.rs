/// TMDB (The Movie Database) provider
///
/// API Flow:
/// 1. Listing: /discover/{movie|tv} with genre filters, one call per provider page
/// 2. Details: /{movie|tv}/{id}, then a best-effort certification lookup
///    (/movie/{id}/release_dates or /tv/{id}/content_ratings)
/// 3. Extras: /credits, /videos, /images, /recommendations under the same resource
///
/// Credentials starting with `eyJ` are v4 read access tokens and are sent as a
/// bearer header plus `access_token`; anything else is a v3 `api_key`.
use crate::{
    config::Config,
    error::ProviderError,
    models::{
        title::{TmdbContentRatings, TmdbCredits, TmdbDetail, TmdbImages, TmdbReleaseDates, TmdbVideos},
        ContentDetail, ContentType, Credits, DiscoverQuery, Images, Recommendations, TmdbListItem,
        TmdbPage, Videos,
    },
    services::{providers::CatalogProvider, query::join_genre_ids},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::ProviderPage;

const PROVIDER_NAME: &str = "tmdb";
const ACCESS_TOKEN_PREFIX: &str = "eyJ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    ApiKey,
    AccessToken,
}

impl AuthMode {
    fn detect(credential: &str) -> Self {
        let is_token = credential
            .get(..ACCESS_TOKEN_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ACCESS_TOKEN_PREFIX));
        if is_token {
            AuthMode::AccessToken
        } else {
            AuthMode::ApiKey
        }
    }

    fn query_param(&self) -> &'static str {
        match self {
            AuthMode::ApiKey => "api_key",
            AuthMode::AccessToken => "access_token",
        }
    }
}

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    region: String,
    auth: AuthMode,
}

impl TmdbClient {
    /// Creates a client whose calls give up after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        region: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        let auth = AuthMode::detect(&api_key);

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            region,
            auth,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_region.clone(),
            config.tmdb_timeout(),
        )
    }

    /// Query parameters for one provider page of a discover query
    fn discover_params(query: &DiscoverQuery, provider_page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("with_genres", join_genre_ids(&query.include_genre_ids))];
        if !query.exclude_genre_ids.is_empty() {
            params.push(("without_genres", join_genre_ids(&query.exclude_genre_ids)));
        }
        params.push(("page", provider_page.to_string()));
        params.push(("sort_by", query.sort_by.to_string()));
        params
    }

    /// GETs `path` and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(url = %url, provider = PROVIDER_NAME, "Provider request");

        let mut request = self
            .http_client
            .get(&url)
            .query(&[(self.auth.query_param(), self.api_key.as_str())])
            .query(params);
        if self.auth == AuthMode::AccessToken {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                provider = PROVIDER_NAME,
                "Failed to deserialize TMDB response"
            );
            ProviderError::Decode(e.to_string())
        })
    }

    /// Certification or content rating for the configured region.
    /// Any failure yields `None`.
    async fn certification(&self, content_type: ContentType, id: u64) -> Option<String> {
        let result = match content_type {
            ContentType::Movie => self
                .get_json::<TmdbReleaseDates>(&format!("/movie/{}/release_dates", id), &[])
                .await
                .map(|dates| dates.certification_for(&self.region)),
            ContentType::Tv => self
                .get_json::<TmdbContentRatings>(&format!("/tv/{}/content_ratings", id), &[])
                .await
                .map(|ratings| ratings.rating_for(&self.region)),
        };

        match result {
            Ok(certification) => certification,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    content_type = %content_type,
                    id,
                    "Certification lookup failed, omitting"
                );
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    async fn discover_page(
        &self,
        query: &DiscoverQuery,
        provider_page: u32,
    ) -> Result<ProviderPage, ProviderError> {
        let path = format!("/discover/{}", query.resource.resource());
        let params = Self::discover_params(query, provider_page);

        // a missing listing endpoint is a provider fault, not a missing title
        let page: TmdbPage<TmdbListItem> = self
            .get_json(&path, &params)
            .await
            .map_err(|e| match e {
                ProviderError::NotFound => ProviderError::Status {
                    status: 404,
                    body: format!("{} not found", path),
                },
                other => other,
            })?;

        tracing::info!(
            resource = %query.resource,
            with_genres = %join_genre_ids(&query.include_genre_ids),
            provider_page,
            results = page.results.len(),
            provider = PROVIDER_NAME,
            "Discover page fetched"
        );

        Ok(ProviderPage {
            items: page
                .results
                .into_iter()
                .map(|item| item.into_summary(query.resource))
                .collect(),
            total_pages: page.total_pages,
            total_results: page.total_results,
        })
    }

    async fn details(
        &self,
        content_type: ContentType,
        id: u64,
    ) -> Result<ContentDetail, ProviderError> {
        let path = format!("/{}/{}", content_type.resource(), id);
        let detail: TmdbDetail = self.get_json(&path, &[]).await?;
        let certification = self.certification(content_type, id).await;

        tracing::info!(
            content_type = %content_type,
            id,
            has_certification = certification.is_some(),
            provider = PROVIDER_NAME,
            "Details fetched"
        );

        Ok(detail.into_detail(content_type, certification))
    }

    async fn credits(&self, content_type: ContentType, id: u64) -> Result<Credits, ProviderError> {
        let path = format!("/{}/{}/credits", content_type.resource(), id);
        let credits: TmdbCredits = self.get_json(&path, &[]).await?;
        Ok(credits.into())
    }

    async fn videos(&self, content_type: ContentType, id: u64) -> Result<Videos, ProviderError> {
        let path = format!("/{}/{}/videos", content_type.resource(), id);
        let videos: TmdbVideos = self.get_json(&path, &[]).await?;
        Ok(videos.into())
    }

    async fn images(&self, content_type: ContentType, id: u64) -> Result<Images, ProviderError> {
        let path = format!("/{}/{}/images", content_type.resource(), id);
        let images: TmdbImages = self.get_json(&path, &[]).await?;
        Ok(images.into())
    }

    async fn recommendations(
        &self,
        content_type: ContentType,
        id: u64,
    ) -> Result<Recommendations, ProviderError> {
        let path = format!("/{}/{}/recommendations", content_type.resource(), id);
        let page: TmdbPage<TmdbListItem> = self
            .get_json(&path, &[("page", "1".to_string())])
            .await?;

        Ok(Recommendations {
            results: page
                .results
                .into_iter()
                .map(|item| item.into_summary(content_type))
                .collect(),
        })
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
