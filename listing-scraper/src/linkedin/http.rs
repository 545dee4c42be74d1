use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use super::{job_search_url, Error, FetchStrategy, Result};
use crate::types::JobListing;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref CARD: Selector = Selector::parse("div.base-card").unwrap();
    static ref TITLE: Selector = Selector::parse("h3.base-search-card__title").unwrap();
    static ref COMPANY: Selector = Selector::parse("h4.base-search-card__subtitle").unwrap();
    static ref LOCATION: Selector = Selector::parse("span.job-search-card__location").unwrap();
    static ref LINK: Selector = Selector::parse("a.base-card__full-link").unwrap();
}

/// Fast path: a single GET against the public search page, parsed with a
/// plain HTML parser. No javascript, so this only works while the site still
/// renders result cards server side.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("static reqwest client config");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchStrategy for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(
        &self,
        query: &str,
        location: &str,
        max_results: usize,
    ) -> Result<Vec<JobListing>> {
        let url = job_search_url(query, location);
        log::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            log::error!(
                "job search request not ok, status: {}, url: {}",
                resp.status(),
                url
            );
            return Err(Error::RequestNotOk(url));
        }
        let body = resp.text().await?;
        Ok(parse_listing_cards(&body, max_results))
    }
}

/// Drops everything from the first `?` on. Listing links carry per-search
/// tracking parameters that would make identical jobs look distinct.
pub(crate) fn strip_tracking(url: &str) -> String {
    url.split('?').next().unwrap_or(url).to_owned()
}

fn element_text(card: ElementRef, selector: &Selector) -> Option<String> {
    let text = card.select(selector).next()?.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

fn parse_card(card: ElementRef) -> Option<JobListing> {
    let title = element_text(card, &TITLE)?;
    let company = element_text(card, &COMPANY)?;
    let location = element_text(card, &LOCATION)?;
    let href = card.select(&LINK).next()?.value().attr("href")?;
    Some(JobListing::new(
        title,
        company,
        format!("Location: {}", location),
        strip_tracking(href),
    ))
}

/// Extracts up to `max_results` listings from a search results page. A card
/// with a missing field is logged and skipped, it never aborts the batch.
pub(crate) fn parse_listing_cards(html: &str, max_results: usize) -> Vec<JobListing> {
    let doc = Html::parse_document(html);
    let mut listings = Vec::new();
    for card in doc.select(&CARD) {
        if listings.len() == max_results {
            break;
        }
        match parse_card(card) {
            Some(listing) => listings.push(listing),
            None => log::warn!("skipping job card with missing fields"),
        }
    }
    listings
}
