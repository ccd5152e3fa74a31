use std::sync::Arc;

use futures::future::join_all;
use serde_json::Value;

use crate::completion::{CompletionBackend, CompletionRequest};
use crate::data_models::{RentalCandidate, WebResult};
use crate::error::UpstreamError;
use crate::prompt::{self, MAX_CANDIDATES};
use crate::query_expander::expand_query;
use crate::sanitizer::{self, Sanitized};
use crate::web_search::{RESULTS_PER_VARIANT, ResultSet, SearchBackend, listing_query};

const PROMPT_PREVIEW_CHARS: usize = 800;

/// What happened to one rental search. The HTTP layer flattens every
/// non-success variant to an empty list.
#[derive(Debug)]
pub enum SearchOutcome {
    Success(Vec<Value>),
    /// The web search found nothing, so the model was never asked.
    NoResults,
    UpstreamFailure(UpstreamError),
    ParseFailure { raw: String },
}

impl SearchOutcome {
    pub fn into_candidates(self) -> Vec<Value> {
        match self {
            SearchOutcome::Success(candidates) => candidates,
            SearchOutcome::NoResults
            | SearchOutcome::UpstreamFailure(_)
            | SearchOutcome::ParseFailure { .. } => Vec::new(),
        }
    }
}

/// Search -> prompt -> completion -> sanitize pipeline.
pub struct RentalSearch {
    search: Arc<dyn SearchBackend>,
    completion: Arc<dyn CompletionBackend>,
}

impl RentalSearch {
    pub fn new(search: Arc<dyn SearchBackend>, completion: Arc<dyn CompletionBackend>) -> Self {
        Self { search, completion }
    }

    pub async fn search(&self, user_query: &str) -> SearchOutcome {
        tracing::info!(query = %user_query, "searching rentals");

        let results = match self.collect_web_results(user_query).await {
            Ok(results) => results,
            Err(e) => {
                tracing::error!("web search failed: {e:#}");
                return SearchOutcome::UpstreamFailure(e);
            }
        };

        if results.is_empty() {
            tracing::info!("no web search results found");
            return SearchOutcome::NoResults;
        }
        tracing::info!(unique = results.len(), "collected web results");

        let full_prompt = prompt::assemble_prompt(user_query, &results);
        tracing::debug!(
            "prompt sent to model:\n{}",
            prompt::preview(&full_prompt, PROMPT_PREVIEW_CHARS)
        );

        let request = CompletionRequest::new(prompt::system_instruction(), full_prompt);
        let raw = match self.completion.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("completion failed: {e:#}");
                return SearchOutcome::UpstreamFailure(e);
            }
        };
        tracing::info!(chars = raw.chars().count(), "model response received");

        let value = match sanitizer::sanitize(&raw) {
            Sanitized::Parsed(value) => value,
            Sanitized::Invalid { .. } => return SearchOutcome::ParseFailure { raw },
        };

        let candidates = sanitizer::into_candidates(value, MAX_CANDIDATES);
        tracing::info!(count = candidates.len(), "processed rentals");
        for candidate in &candidates {
            let parsed = RentalCandidate::from_value(candidate);
            let name = parsed.as_ref().and_then(|c| c.name_of_rental.as_deref());
            let address = parsed.as_ref().and_then(|c| c.address.as_deref());
            tracing::info!(
                "found: {} at {}",
                name.unwrap_or("Unknown"),
                address.unwrap_or("Unknown address")
            );
        }

        SearchOutcome::Success(candidates)
    }

    /// Runs the capped query variants concurrently and merges the hits in
    /// variant order, keeping the first hit for each link.
    pub async fn collect_web_results(
        &self,
        user_query: &str,
    ) -> Result<Vec<WebResult>, UpstreamError> {
        let variants = expand_query(user_query);
        tracing::info!(variants = variants.len(), "expanded query");

        let searches = variants.iter().map(|variant| {
            let q = listing_query(variant);
            async move { self.search.search(&q, RESULTS_PER_VARIANT).await }
        });
        let responses = join_all(searches).await;

        let mut set = ResultSet::new();
        for (i, (variant, response)) in variants.iter().zip(responses).enumerate() {
            let hits = response?;
            tracing::info!(variant = i + 1, hits = hits.len(), query = %variant, "search variant done");
            for hit in hits {
                set.push(hit, variant);
            }
        }

        Ok(set.into_results())
    }
}
