use std::sync::Arc;

use futures::future::join_all;

use crate::data_models::{SiteLink, SiteLookupResult};
use crate::town::TOWN;
use crate::web_search::{OrganicResult, SearchBackend};

/// Results requested per site.
pub const RESULTS_PER_SITE: u32 = 3;

/// A rental site checked for a specific address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSite {
    pub key: &'static str,
    pub domain: &'static str,
}

pub const TARGET_SITES: &[TargetSite] = &[
    TargetSite {
        key: "zillow",
        domain: "zillow.com",
    },
    TargetSite {
        key: "apartments_com",
        domain: "apartments.com",
    },
    TargetSite {
        key: "rent_com",
        domain: "rent.com",
    },
];

/// Commas become spaces, whitespace runs collapse to one space.
pub fn normalize_address(address: &str) -> String {
    address
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn site_query(address: &str, domain: &str) -> String {
    format!("\"{address}\" site:{domain} {TOWN}")
}

/// First hit whose link points at the site's domain.
fn first_match(hits: Vec<OrganicResult>, domain: &str) -> Option<SiteLink> {
    hits.into_iter()
        .find(|hit| hit.link.to_lowercase().contains(domain))
        .map(|hit| SiteLink {
            url: hit.link,
            title: hit.title,
            snippet: hit.snippet,
        })
}

/// Finds a listing page for one address on each target site.
pub struct SiteLookup {
    search: Arc<dyn SearchBackend>,
    sites: &'static [TargetSite],
}

impl SiteLookup {
    pub fn new(search: Arc<dyn SearchBackend>) -> Self {
        Self {
            search,
            sites: TARGET_SITES,
        }
    }

    /// `property_name` is accepted for callers that have one but does not
    /// affect the search. A site whose search fails is left out of the result.
    pub async fn lookup(&self, address: &str, property_name: Option<&str>) -> SiteLookupResult {
        let clean_address = normalize_address(address);
        tracing::info!(
            address = %clean_address,
            property_name = property_name.unwrap_or(""),
            "searching listing sites"
        );

        let searches = self.sites.iter().map(|site| {
            let q = site_query(&clean_address, site.domain);
            async move { (site, self.search.search(&q, RESULTS_PER_SITE).await) }
        });

        let mut results = SiteLookupResult::new();
        for (site, response) in join_all(searches).await {
            match response {
                Ok(hits) => {
                    if let Some(link) = first_match(hits, site.domain) {
                        results.insert(site.key.to_string(), link);
                    }
                }
                Err(e) => {
                    tracing::warn!(site = site.key, "site search failed, skipping: {e:#}");
                }
            }
        }

        tracing::info!(sites = ?results.keys().collect::<Vec<_>>(), "found site links");
        results
    }
}
