//! Catalog data provider abstraction
//!
//! The discover/detail services talk to the catalog through this trait so the
//! paging and validation logic can be exercised without a live provider. TMDB
//! is the only implementation.

use crate::{
    error::ProviderError,
    models::{
        ContentDetail, ContentSummary, ContentType, Credits, DiscoverQuery, Images,
        Recommendations, Videos,
    },
};

pub mod tmdb;

pub use tmdb::TmdbClient;

/// One provider-sized page of a discover listing
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderPage {
    pub items: Vec<ContentSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Trait for catalog providers
///
/// Every call is a single attempt: failures come back as a typed
/// [`ProviderError`] and are never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch one provider page (1-indexed) of a discover query
    async fn discover_page(
        &self,
        query: &DiscoverQuery,
        provider_page: u32,
    ) -> Result<ProviderPage, ProviderError>;

    /// Fetch details; certification is looked up best-effort and may be absent
    async fn details(&self, content_type: ContentType, id: u64)
        -> Result<ContentDetail, ProviderError>;

    async fn credits(&self, content_type: ContentType, id: u64) -> Result<Credits, ProviderError>;

    async fn videos(&self, content_type: ContentType, id: u64) -> Result<Videos, ProviderError>;

    async fn images(&self, content_type: ContentType, id: u64) -> Result<Images, ProviderError>;

    async fn recommendations(
        &self,
        content_type: ContentType,
        id: u64,
    ) -> Result<Recommendations, ProviderError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
