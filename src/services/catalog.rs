use std::sync::Arc;

use crate::{
    error::{CatalogError, CatalogResult, ProviderError},
    models::{
        BrowseCategory, ContentDetail, ContentType, Credits, DiscoverQuery, DiscoverResult,
        Images, Recommendations, Videos,
    },
    services::{genres, moods, pagination, providers::CatalogProvider, query},
};

/// Consumer-facing catalog operations
///
/// Validates browse requests before any provider call, translates them into
/// discover queries and assembles application pages. Genre and mood browsing
/// can use different page sizes.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn CatalogProvider>,
    genre_page_size: usize,
    mood_page_size: usize,
}

impl CatalogService {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        genre_page_size: usize,
        mood_page_size: usize,
    ) -> Self {
        Self {
            provider,
            genre_page_size,
            mood_page_size,
        }
    }

    /// Lists titles of `content_type` (movie, tv or animation) in `genre_id`
    pub async fn discover(
        &self,
        content_type: &str,
        genre_id: u32,
        page: u32,
    ) -> CatalogResult<DiscoverResult> {
        let query = Self::genre_discover_query(content_type, genre_id, page)?;
        self.run(&query, self.genre_page_size).await
    }

    /// Lists movies matching any genre of `mood`
    pub async fn discover_by_mood(&self, mood: &str, page: u32) -> CatalogResult<DiscoverResult> {
        if page == 0 {
            return Err(CatalogError::InvalidPage);
        }
        let query = query::mood_query(mood, page).ok_or_else(|| CatalogError::UnknownMood {
            mood: mood.trim().to_string(),
            available: moods::supported_moods(),
        })?;
        self.run(&query, self.mood_page_size).await
    }

    /// Validates and translates a genre browse request
    pub fn genre_discover_query(
        content_type: &str,
        genre_id: u32,
        page: u32,
    ) -> CatalogResult<DiscoverQuery> {
        let category = BrowseCategory::parse(content_type)
            .ok_or_else(|| CatalogError::InvalidContentType(content_type.trim().to_string()))?;

        if genres::find_genre(category.content_type(), genre_id).is_none() {
            return Err(CatalogError::InvalidGenre {
                content_type: content_type.trim().to_lowercase(),
                genre_id,
            });
        }

        if page == 0 {
            return Err(CatalogError::InvalidPage);
        }

        Ok(query::genre_query(category, genre_id, page))
    }

    async fn run(&self, query: &DiscoverQuery, page_size: usize) -> CatalogResult<DiscoverResult> {
        let result = pagination::fetch_app_page(self.provider.as_ref(), query, page_size).await;

        match &result {
            Ok(page) => tracing::info!(
                resource = %query.resource,
                page = page.page,
                results = page.results.len(),
                total_results = page.total_results,
                "Discover completed"
            ),
            Err(e) => tracing::error!(
                error = %e,
                resource = %query.resource,
                page = query.requested_page,
                "Discover failed"
            ),
        }

        result
    }

    pub async fn details(&self, content_type: Option<&str>, id: u64) -> CatalogResult<ContentDetail> {
        let content_type = ContentType::parse_or_movie(content_type);
        let result = self.provider.details(content_type, id).await;
        self.logged(result, "details", content_type, id)
    }

    pub async fn credits(&self, content_type: Option<&str>, id: u64) -> CatalogResult<Credits> {
        let content_type = ContentType::parse_or_movie(content_type);
        let result = self.provider.credits(content_type, id).await;
        self.logged(result, "credits", content_type, id)
    }

    pub async fn videos(&self, content_type: Option<&str>, id: u64) -> CatalogResult<Videos> {
        let content_type = ContentType::parse_or_movie(content_type);
        let result = self.provider.videos(content_type, id).await;
        self.logged(result, "videos", content_type, id)
    }

    pub async fn images(&self, content_type: Option<&str>, id: u64) -> CatalogResult<Images> {
        let content_type = ContentType::parse_or_movie(content_type);
        let result = self.provider.images(content_type, id).await;
        self.logged(result, "images", content_type, id)
    }

    pub async fn recommendations(
        &self,
        content_type: Option<&str>,
        id: u64,
    ) -> CatalogResult<Recommendations> {
        let content_type = ContentType::parse_or_movie(content_type);
        let result = self.provider.recommendations(content_type, id).await;
        self.logged(result, "recommendations", content_type, id)
    }

    fn logged<T>(
        &self,
        result: Result<T, ProviderError>,
        lookup: &'static str,
        content_type: ContentType,
        id: u64,
    ) -> CatalogResult<T> {
        result.map_err(|e| {
            match &e {
                ProviderError::NotFound => tracing::info!(
                    lookup,
                    content_type = %content_type,
                    id,
                    provider = self.provider.name(),
                    "Provider has no such title"
                ),
                _ => tracing::error!(
                    error = %e,
                    lookup,
                    content_type = %content_type,
                    id,
                    provider = self.provider.name(),
                    "Provider lookup failed"
                ),
            }
            CatalogError::Provider(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentSummary;
    use crate::services::providers::{MockCatalogProvider, ProviderPage};
    use mockall::predicate::{always, eq, function};

    fn one_item_page() -> ProviderPage {
        ProviderPage {
            items: vec![ContentSummary {
                id: 1,
                title: "Only".to_string(),
                overview: None,
                poster_path: None,
                vote_average: 5.0,
                release_date: None,
            }],
            total_pages: 1,
            total_results: 1,
        }
    }

    fn service(provider: MockCatalogProvider) -> CatalogService {
        CatalogService::new(Arc::new(provider), 20, 21)
    }

    #[tokio::test]
    async fn test_discover_tv_scenario() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover_page()
            .with(
                function(|q: &DiscoverQuery| {
                    q.resource == ContentType::Tv
                        && q.include_genre_ids == vec![10759]
                        && q.exclude_genre_ids.is_empty()
                }),
                eq(1),
            )
            .times(1)
            .returning(|_, _| Ok(one_item_page()));

        let result = service(provider).discover("tv", 10759, 1).await.unwrap();
        assert_eq!(result.page, 1);
        assert_eq!(result.results.len(), 1);
    }

    #[tokio::test]
    async fn test_discover_movie_scenario_excludes_animation() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover_page()
            .with(
                function(|q: &DiscoverQuery| {
                    q.resource == ContentType::Movie
                        && q.include_genre_ids == vec![28]
                        && q.exclude_genre_ids == vec![16]
                }),
                eq(1),
            )
            .times(1)
            .returning(|_, _| Ok(one_item_page()));

        tokio_test::assert_ok!(service(provider).discover(" Movie ", 28, 1).await);
    }

    #[tokio::test]
    async fn test_discover_by_mood_scenario() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover_page()
            .with(
                function(|q: &DiscoverQuery| {
                    q.resource == ContentType::Movie && q.include_genre_ids == vec![28, 12, 878]
                }),
                always(),
            )
            .times(1)
            .returning(|_, _| Ok(one_item_page()));

        let result = service(provider)
            .discover_by_mood("ExcitedAction", 1)
            .await
            .unwrap();
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn test_provider_failure_returns_error_without_items() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider.expect_discover_page().times(1).returning(|_, _| {
            Err(ProviderError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
        });

        let err = tokio_test::assert_err!(service(provider).discover("movie", 28, 1).await);
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_transport_failure_returns_error_without_items() {
        // a port nobody listens on gives a real connection-refused error
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let refused = reqwest::get(format!("http://127.0.0.1:{}/", port))
            .await
            .unwrap_err();

        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_discover_page()
            .with(always(), eq(1))
            .times(1)
            .return_once(move |_, _| Err(ProviderError::Transport(refused)));

        let err = tokio_test::assert_err!(service(provider).discover_by_mood("Happy", 1).await);
        assert!(matches!(
            err,
            CatalogError::Provider(ProviderError::Transport(ref e)) if e.is_connect()
        ));
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_validation_happens_before_any_provider_call() {
        // no expectations: any provider call would panic
        let catalog = service(MockCatalogProvider::new());

        assert!(matches!(
            catalog.discover("cartoon", 28, 1).await,
            Err(CatalogError::InvalidContentType(_))
        ));
        assert!(matches!(
            catalog.discover("tv", 28, 1).await,
            Err(CatalogError::InvalidGenre { genre_id: 28, .. })
        ));
        assert!(matches!(
            catalog.discover("movie", 28, 0).await,
            Err(CatalogError::InvalidPage)
        ));
        assert!(matches!(
            catalog.discover_by_mood("Sad", 1).await,
            Err(CatalogError::UnknownMood { .. })
        ));
        assert!(matches!(
            catalog.discover_by_mood("Happy", 0).await,
            Err(CatalogError::InvalidPage)
        ));
    }

    #[test]
    fn test_animation_category_validates_against_movie_genres() {
        let query = CatalogService::genre_discover_query("animation", 35, 1).unwrap();
        assert_eq!(query.include_genre_ids, vec![16, 35]);
        assert!(CatalogService::genre_discover_query("animation", 10759, 1).is_err());
    }

    #[tokio::test]
    async fn test_details_normalizes_type() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_credits()
            .with(eq(ContentType::Movie), eq(603))
            .times(1)
            .returning(|_, _| {
                Ok(Credits {
                    director: Some("Lana Wachowski".to_string()),
                    cast: vec![],
                })
            });

        let credits = service(provider)
            .credits(Some("animation"), 603)
            .await
            .unwrap();
        assert_eq!(credits.director.as_deref(), Some("Lana Wachowski"));
    }

    #[tokio::test]
    async fn test_details_not_found_is_provider_error() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_details()
            .with(eq(ContentType::Tv), eq(42))
            .times(1)
            .returning(|_, _| Err(ProviderError::NotFound));

        let result = service(provider).details(Some("tv"), 42).await;
        assert!(matches!(
            result,
            Err(CatalogError::Provider(ProviderError::NotFound))
        ));
    }
}
