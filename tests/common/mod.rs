#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hokie_homes::api::{AppState, create_router};
use hokie_homes::completion::{CompletionBackend, CompletionRequest};
use hokie_homes::error::UpstreamError;
use hokie_homes::rental_search::RentalSearch;
use hokie_homes::site_lookup::SiteLookup;
use hokie_homes::web_search::{OrganicResult, SearchBackend};
use reqwest::StatusCode;

pub fn hit(title: &str, link: &str) -> OrganicResult {
    OrganicResult {
        title: title.to_string(),
        snippet: format!("{title} snippet"),
        link: link.to_string(),
    }
}

/// Answers each query by the first rule whose needle it contains.
#[derive(Default)]
pub struct FakeSearch {
    rules: Vec<(String, Result<Vec<OrganicResult>, String>)>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, needle: &str, hits: Vec<OrganicResult>) -> Self {
        self.rules.push((needle.to_string(), Ok(hits)));
        self
    }

    pub fn fail_on(mut self, needle: &str) -> Self {
        self.rules
            .push((needle.to_string(), Err(format!("upstream down for {needle}"))));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for FakeSearch {
    async fn search(&self, query: &str, _num: u32) -> Result<Vec<OrganicResult>, UpstreamError> {
        self.queries.lock().unwrap().push(query.to_string());
        for (needle, answer) in &self.rules {
            if query.contains(needle.as_str()) {
                return answer.clone().map_err(|body| UpstreamError::SearchStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    body,
                });
            }
        }
        Ok(Vec::new())
    }
}

/// Panics on every call, standing in for a bug inside a request handler.
pub struct PanickingSearch;

#[async_trait]
impl SearchBackend for PanickingSearch {
    async fn search(&self, query: &str, _num: u32) -> Result<Vec<OrganicResult>, UpstreamError> {
        panic!("search backend blew up on {query}");
    }
}

/// Returns a canned completion and counts calls.
pub struct FakeCompletion {
    answer: Option<String>,
    calls: AtomicUsize,
    pub last_request: Mutex<Option<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            answer: Some(text.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for FakeCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.answer.clone().ok_or(UpstreamError::EmptyCompletion)
    }
}

pub fn app_state(search: Arc<FakeSearch>, completion: Arc<FakeCompletion>) -> AppState {
    AppState {
        rentals: Arc::new(RentalSearch::new(search.clone(), completion)),
        sites: Arc::new(SiteLookup::new(search)),
    }
}

pub fn router(search: Arc<FakeSearch>, completion: Arc<FakeCompletion>) -> axum::Router {
    create_router(app_state(search, completion))
}

pub const THREE_RENTALS: &str = r#"[
  {"name_of_rental": "The Edge", "address": "1101 Combs Drive", "distance_from_drillfield_in_miles": 1, "rent_price": 1200, "num_bedrooms": 2, "num_bathrooms": 2, "website_link": "https://www.apartments.com/the-edge"},
  {"name_of_rental": "Foxridge", "address": "1001 Foxridge Drive", "distance_from_drillfield_in_miles": 2, "rent_price": "Contact for pricing", "num_bedrooms": 3, "num_bathrooms": 2, "website_link": "https://www.zillow.com/foxridge"},
  {"name_of_rental": "Collegiate Suites", "address": "1300 University City Boulevard", "distance_from_drillfield_in_miles": 2, "rent_price": 950, "num_bedrooms": 1, "num_bathrooms": 1, "website_link": "https://www.rent.com/collegiate"}
]"#;
