pub mod browser;
pub mod http;
pub mod synthetic;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::JobListing;

pub use browser::BrowserFetcher;
pub use http::HttpFetcher;
pub use synthetic::SyntheticFetcher;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{0}'")]
    RequestNotOk(String),
    #[error("Browser automation error: '{0}'")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
    #[error("Content not found in html: '{0}'")]
    ContentNotFound(&'static str),
}

pub(crate) fn job_search_url(query: &str, location: &str) -> String {
    format!(
        "https://www.linkedin.com/jobs/search?keywords={}&location={}",
        urlencoding::encode(query),
        urlencoding::encode(location)
    )
}

/// One tier of the fetch cascade. Every tier has the same contract so the
/// orchestrator can try them as an ordered chain instead of nesting fallback
/// handlers.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(
        &self,
        query: &str,
        location: &str,
        max_results: usize,
    ) -> Result<Vec<JobListing>>;
}

/// Ordered chain of fetch tiers: plain HTTP scrape, browser-driven scrape,
/// synthetic placeholders. Stops at the first tier that yields listings.
pub struct Fetcher {
    strategies: Vec<Box<dyn FetchStrategy>>,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(HttpFetcher::new()),
            Box::new(BrowserFetcher::new()),
            Box::new(SyntheticFetcher),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn FetchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Always returns at least one listing and never more than `max_results`.
    /// Failures inside a tier are logged and absorbed, never propagated.
    pub async fn fetch(&self, query: &str, location: &str, max_results: usize) -> Vec<JobListing> {
        for strategy in &self.strategies {
            match strategy.fetch(query, location, max_results).await {
                Ok(listings) if !listings.is_empty() => {
                    log::info!(
                        "fetched {} listings via '{}' for query: {}",
                        listings.len(),
                        strategy.name(),
                        query
                    );
                    let mut listings = listings;
                    listings.truncate(max_results);
                    return listings;
                }
                Ok(_) => {
                    log::warn!(
                        "tier '{}' returned no listings for query: {}, trying next tier",
                        strategy.name(),
                        query
                    );
                }
                Err(e) => {
                    log::warn!(
                        "tier '{}' failed for query: {}, error: {}, trying next tier",
                        strategy.name(),
                        query,
                        e
                    );
                }
            }
        }
        // Unreachable with the default chain since the synthetic tier never
        // comes back empty, but a custom chain still gets the non-empty
        // guarantee.
        synthetic::placeholder_listings(query, max_results)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct EmptyStrategy;

    #[async_trait]
    impl FetchStrategy for EmptyStrategy {
        fn name(&self) -> &'static str {
            "empty"
        }

        async fn fetch(&self, _: &str, _: &str, _: usize) -> Result<Vec<JobListing>> {
            Ok(Vec::new())
        }
    }

    struct FailingStrategy;

    #[async_trait]
    impl FetchStrategy for FailingStrategy {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn fetch(&self, _: &str, _: &str, _: usize) -> Result<Vec<JobListing>> {
            Err(Error::ContentNotFound("job cards"))
        }
    }

    struct OneListingStrategy;

    #[async_trait]
    impl FetchStrategy for OneListingStrategy {
        fn name(&self) -> &'static str {
            "one-listing"
        }

        async fn fetch(&self, query: &str, _: &str, _: usize) -> Result<Vec<JobListing>> {
            Ok(vec![JobListing::new(
                format!("{} Listing", query),
                "Acme".to_owned(),
                "Location: Remote".to_owned(),
                "https://example.com/jobs/1".to_owned(),
            )])
        }
    }

    #[test]
    fn test_job_search_url_is_percent_encoded() {
        let url = job_search_url("Java Developer", "New York");
        assert_eq!(
            url,
            "https://www.linkedin.com/jobs/search?keywords=Java%20Developer&location=New%20York"
        );
    }

    #[tokio::test]
    async fn test_chain_stops_at_first_non_empty_tier() {
        let fetcher = Fetcher::with_strategies(vec![
            Box::new(EmptyStrategy),
            Box::new(FailingStrategy),
            Box::new(OneListingStrategy),
            Box::new(SyntheticFetcher),
        ]);
        let listings = fetcher.fetch("Rust Engineer", "remote", 5).await;
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Rust Engineer Listing");
    }

    #[tokio::test]
    async fn test_chain_falls_back_to_synthetic_listings() {
        let fetcher = Fetcher::with_strategies(vec![
            Box::new(FailingStrategy),
            Box::new(EmptyStrategy),
            Box::new(SyntheticFetcher),
        ]);
        let listings = fetcher.fetch("Java Developer", "remote", 5).await;
        assert_eq!(listings.len(), 5);
        for listing in &listings {
            assert!(!listing.title.is_empty());
            assert!(!listing.company.is_empty());
            assert!(!listing.url.contains('?'));
        }
    }

    #[tokio::test]
    async fn test_chain_without_synthetic_tier_is_still_non_empty() {
        let fetcher = Fetcher::with_strategies(vec![Box::new(FailingStrategy)]);
        let listings = fetcher.fetch("Java Developer", "remote", 3).await;
        assert_eq!(listings.len(), 3);
    }

    #[tokio::test]
    async fn test_chain_never_exceeds_max_results() {
        let fetcher = Fetcher::with_strategies(vec![Box::new(SyntheticFetcher)]);
        let listings = fetcher.fetch("Python Engineer", "remote", 2).await;
        assert_eq!(listings.len(), 2);
    }
}
