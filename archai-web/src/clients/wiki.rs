//! Wikipedia API client
//!
//! Two lookups back the Explore flow: a ranked full-text search and a
//! per-title page-thumbnail lookup. Both hit the same MediaWiki action
//! endpoint with JSON output.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
const USER_AGENT: &str = "ArchAI/0.1.0 (archai front end)";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Requested thumbnail width in pixels
const THUMBNAIL_SIZE: u32 = 400;

/// Search scope suffix appended to every query
const SEARCH_TOPIC_SUFFIX: &str = "archaeological site";

/// Wikipedia client errors
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// One ranked hit from the primary search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// Article title
    pub title: String,
    /// Snippet text, with embedded HTML highlight tags
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct PagesResponse {
    query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: HashMap<String, PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

/// Search collaborator seam for the Explore flow
///
/// The flow only needs these two lookups; tests substitute a stub.
#[async_trait]
pub trait SiteSearch: Send + Sync {
    /// Ranked text search, capped to `limit` hits
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, WikiError>;

    /// Representative thumbnail URL for an article title, if one exists
    async fn thumbnail(&self, title: &str) -> Result<Option<String>, WikiError>;
}

/// Wikipedia API client
pub struct WikiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl WikiClient {
    pub fn new() -> Result<Self, WikiError> {
        Self::with_base_url(WIKIPEDIA_API_URL.to_string())
    }

    /// Client against an alternate endpoint (tests point this at a local server)
    pub fn with_base_url(base_url: String) -> Result<Self, WikiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| WikiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, WikiError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WikiError::Api(status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WikiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SiteSearch for WikiClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, WikiError> {
        let srsearch = format!("{} {}", query, SEARCH_TOPIC_SUFFIX);
        let srlimit = limit.to_string();

        tracing::debug!(query = %query, limit = limit, "Querying Wikipedia search");

        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", srsearch.as_str()),
            ("srnamespace", "0"),
            ("srlimit", srlimit.as_str()),
            ("format", "json"),
        ];

        let response: SearchResponse = self.get_json(&params).await?;

        Ok(response.query.map(|q| q.search).unwrap_or_default())
    }

    async fn thumbnail(&self, title: &str) -> Result<Option<String>, WikiError> {
        let pithumbsize = THUMBNAIL_SIZE.to_string();

        tracing::debug!(title = %title, "Querying Wikipedia page thumbnail");

        let params = [
            ("action", "query"),
            ("titles", title),
            ("prop", "pageimages|pageterms"),
            ("pithumbsize", pithumbsize.as_str()),
            ("format", "json"),
        ];

        let response: PagesResponse = self.get_json(&params).await?;

        let thumbnail = response
            .query
            .and_then(|q| q.pages.into_values().next())
            .and_then(|page| page.thumbnail)
            .map(|t| t.source);

        Ok(thumbnail)
    }
}
