//! Maps application pages onto the provider's fixed-size pages.
//!
//! The provider always serves 20 items per page. An application page of a
//! different size may straddle two (or more) provider pages, which are fetched
//! in order, concatenated and sliced.

use std::ops::RangeInclusive;

use crate::{
    error::{CatalogError, CatalogResult, ProviderError},
    models::{DiscoverQuery, DiscoverResult},
    services::providers::CatalogProvider,
};

/// Items per page served by the provider
pub const PROVIDER_PAGE_SIZE: usize = 20;

/// The provider pages backing one application page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub app_page: u32,
    pub page_size: usize,
    pub first_provider_page: u32,
    pub last_provider_page: u32,
    /// Items to drop from the front of the first provider page
    pub skip: usize,
}

impl PageWindow {
    /// Window for `app_page` (1-indexed) at `page_size` items per page.
    /// Absent for page 0, size 0, or provider pages beyond `u32`.
    pub fn new(app_page: u32, page_size: usize) -> Option<Self> {
        if app_page == 0 || page_size == 0 {
            return None;
        }

        let n = app_page as u64;
        let s = page_size as u64;
        let p = PROVIDER_PAGE_SIZE as u64;

        let start = (n - 1).checked_mul(s)?;
        let end = n.checked_mul(s)?;
        let first = start / p + 1;
        let last = (end - 1) / p + 1;
        let skip = start - (first - 1) * p;

        Some(Self {
            app_page,
            page_size,
            first_provider_page: u32::try_from(first).ok()?,
            last_provider_page: u32::try_from(last).ok()?,
            skip: skip as usize,
        })
    }

    pub fn provider_pages(&self) -> RangeInclusive<u32> {
        self.first_provider_page..=self.last_provider_page
    }

    /// Application pages line up 1:1 with provider pages
    pub fn is_passthrough(&self) -> bool {
        self.page_size == PROVIDER_PAGE_SIZE
    }

    /// Application page count for a provider result total
    pub fn total_pages(&self, total_results: u32) -> u32 {
        (total_results as u64).div_ceil(self.page_size as u64) as u32
    }
}

/// Fetches the application page `query.requested_page` at `page_size` items.
///
/// All-or-nothing: any failing provider page fails the whole request.
pub async fn fetch_app_page(
    provider: &dyn CatalogProvider,
    query: &DiscoverQuery,
    page_size: usize,
) -> CatalogResult<DiscoverResult> {
    let window =
        PageWindow::new(query.requested_page, page_size).ok_or(CatalogError::InvalidPage)?;

    let mut items = Vec::new();
    let mut totals: Option<(u32, u32)> = None;

    for provider_page in window.provider_pages() {
        if let Some((provider_total_pages, _)) = totals {
            if provider_page > provider_total_pages {
                tracing::debug!(
                    provider_page,
                    provider_total_pages,
                    "Skipping provider page past the end of results"
                );
                break;
            }
        }

        let page = provider
            .discover_page(query, provider_page)
            .await
            .map_err(|e: ProviderError| {
                tracing::warn!(
                    error = %e,
                    provider = provider.name(),
                    resource = %query.resource,
                    provider_page,
                    app_page = window.app_page,
                    "Provider page fetch failed"
                );
                CatalogError::Provider(e)
            })?;

        // Totals are stable across pages of one query; keep the first
        totals.get_or_insert((page.total_pages, page.total_results));
        items.extend(page.items);
    }

    let (provider_total_pages, total_results) = totals.unwrap_or((0, 0));

    let results: Vec<_> = items
        .into_iter()
        .skip(window.skip)
        .take(window.page_size)
        .collect();

    let total_pages = if window.is_passthrough() {
        provider_total_pages
    } else {
        window.total_pages(total_results)
    };

    tracing::debug!(
        app_page = window.app_page,
        first_provider_page = window.first_provider_page,
        last_provider_page = window.last_provider_page,
        skip = window.skip,
        returned = results.len(),
        "Application page assembled"
    );

    Ok(DiscoverResult {
        page: window.app_page,
        results,
        total_pages,
        total_results,
    })
}
