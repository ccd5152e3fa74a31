use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::data_models::WebResult;
use crate::error::UpstreamError;
use crate::town::LISTING_DOMAINS;

pub const SEARCH_ENGINE: &str = "google";

/// Results requested per query variant.
pub const RESULTS_PER_VARIANT: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

/// A keyword web search. `num` is a hint, backends may return fewer or more.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str, num: u32) -> Result<Vec<OrganicResult>, UpstreamError>;
}

/// SerpApi client.
pub struct SerpApiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.serpapi_endpoint.clone(),
            api_key: config.serpapi_key.clone(),
        })
    }
}

#[async_trait]
impl SearchBackend for SerpApiClient {
    async fn search(&self, query: &str, num: u32) -> Result<Vec<OrganicResult>, UpstreamError> {
        let num = num.max(1).to_string();
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("engine", SEARCH_ENGINE),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(UpstreamError::SearchStatus { status, body });
        }

        let body: SearchResponse = res.json().await?;
        Ok(body.organic_results)
    }
}

/// `site:a OR site:b ...` over the given domains.
pub fn site_filter(domains: &[&str]) -> String {
    domains
        .iter()
        .map(|d| format!("site:{d}"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Query sent for one variant of the user's search.
pub fn listing_query(variant: &str) -> String {
    format!("apartments rentals {variant} {}", site_filter(LISTING_DOMAINS))
}

/// Ordered, link-unique collection of web results for one request.
#[derive(Debug, Default)]
pub struct ResultSet {
    seen: HashSet<String>,
    results: Vec<WebResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the hit unless one with the same link is already present.
    pub fn push(&mut self, hit: OrganicResult, query_used: &str) -> bool {
        if !self.seen.insert(hit.link.clone()) {
            return false;
        }
        self.results.push(WebResult {
            title: hit.title,
            snippet: hit.snippet,
            link: hit.link,
            query_used: query_used.to_string(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<WebResult> {
        self.results
    }
}
