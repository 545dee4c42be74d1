use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use thirtyfour::{prelude::*, ChromeCapabilities};
use tokio::time::sleep;

use super::http::strip_tracking;
use super::{job_search_url, Error, FetchStrategy, Result};
use crate::types::JobListing;

const RESULTS_LIST: &str = "ul.jobs-search__results-list";
const RESULT_ITEM: &str = "li.jobs-search-results__list-item";
const ITEM_TITLE: &str = "h3.base-search-card__title";
const ITEM_COMPANY: &str = "h4.base-search-card__subtitle";
const ITEM_LOCATION: &str = "span.job-search-card__location";
const ITEM_LINK: &str = "a.base-card__full-link";

const RESULTS_WAIT: Duration = Duration::from_secs(15);
const POLL_INTERVAL: Duration = Duration::from_millis(500);
const SCROLL_CYCLES: u32 = 2;
const SCROLL_PAUSE: Duration = Duration::from_secs(2);
const CLICK_PAUSE: Duration = Duration::from_secs(1);

const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

/// Second tier: drives a real headless Chrome through chromedriver to render
/// the result list that the plain HTTP path cannot see, scrolling to trigger
/// lazy loading. Expects a webdriver endpoint to be reachable.
pub struct BrowserFetcher {
    webdriver_url: String,
}

impl BrowserFetcher {
    pub fn new() -> Self {
        Self::with_endpoint("http://localhost:9515")
    }

    pub fn with_endpoint(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }

    fn capabilities(&self) -> Result<ChromeCapabilities> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_chrome_arg("--headless=new")?;
        caps.add_chrome_arg("--no-sandbox")?;
        caps.add_chrome_arg("--disable-dev-shm-usage")?;
        caps.add_chrome_arg("--disable-blink-features=AutomationControlled")?;
        let ua = USER_AGENTS[rand::thread_rng().gen_range(0..USER_AGENTS.len())];
        caps.add_chrome_arg(&format!("user-agent={}", ua))?;
        Ok(caps)
    }
}

impl Default for BrowserFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchStrategy for BrowserFetcher {
    fn name(&self) -> &'static str {
        "browser"
    }

    async fn fetch(
        &self,
        query: &str,
        location: &str,
        max_results: usize,
    ) -> Result<Vec<JobListing>> {
        let caps = self.capabilities()?;
        let driver = WebDriver::new(&self.webdriver_url, caps).await?;
        // The session must die on every exit path, so the scrape itself runs
        // in a helper and the quit happens before the result is inspected.
        let result = scrape_results(&driver, query, location, max_results).await;
        if let Err(e) = driver.quit().await {
            log::error!("failed to shut down webdriver session: {}", e);
        }
        result
    }
}

async fn scrape_results(
    driver: &WebDriver,
    query: &str,
    location: &str,
    max_results: usize,
) -> Result<Vec<JobListing>> {
    let url = job_search_url(query, location);
    log::debug!("navigating browser to {}", url);
    driver.goto(&url).await?;
    driver
        .query(By::Css(RESULTS_LIST))
        .wait(RESULTS_WAIT, POLL_INTERVAL)
        .first()
        .await?;

    for _ in 0..SCROLL_CYCLES {
        driver
            .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
            .await?;
        sleep(SCROLL_PAUSE).await;
    }

    let cards = driver.find_all(By::Css(RESULT_ITEM)).await?;
    let mut listings = Vec::new();
    for card in cards.into_iter().take(max_results) {
        match scrape_card(&card).await {
            Ok(listing) => listings.push(listing),
            Err(e) => log::warn!("skipping job card: {}", e),
        }
    }
    Ok(listings)
}

async fn scrape_card(card: &WebElement) -> Result<JobListing> {
    // Clicking the item makes the site render the lazy detail pane; fields
    // below are present on the card itself either way.
    card.click().await?;
    sleep(CLICK_PAUSE).await;

    let title = field_text(card, ITEM_TITLE).await?;
    let company = field_text(card, ITEM_COMPANY).await?;
    let location = field_text(card, ITEM_LOCATION).await?;
    let href = card
        .find(By::Css(ITEM_LINK))
        .await?
        .attr("href")
        .await?
        .ok_or(Error::ContentNotFound("job link href"))?;

    Ok(JobListing::new(
        title,
        company,
        format!("Location: {}", location),
        strip_tracking(&href),
    ))
}

async fn field_text(card: &WebElement, selector: &'static str) -> Result<String> {
    let text = card.find(By::Css(selector)).await?.text().await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::ContentNotFound(selector));
    }
    Ok(text.to_owned())
}
