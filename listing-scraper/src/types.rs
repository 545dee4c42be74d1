use serde::{Deserialize, Serialize};

/// A single scraped or synthesized job posting.
///
/// Created by one of the fetch tiers, enriched once with `match_score` by the
/// ranker and never mutated afterwards. `url` never carries a tracking query
/// string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub summary: String,
    pub url: String,
    /// Bounded relevance score, set by the ranker only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

impl JobListing {
    pub fn new(title: String, company: String, summary: String, url: String) -> Self {
        Self {
            title,
            company,
            summary,
            url,
            match_score: None,
        }
    }
}

/// Parameters of one search, owned by the caller and passed by reference.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub query: String,
    pub location: String,
    pub skills: Vec<String>,
    pub max_results: usize,
}

impl SearchCriteria {
    pub const DEFAULT_LOCATION: &'static str = "remote";
    pub const DEFAULT_MAX_RESULTS: usize = 5;

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: Self::DEFAULT_LOCATION.to_owned(),
            skills: Vec::new(),
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }
}
