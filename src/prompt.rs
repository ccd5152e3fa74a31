//! Prompt text for the extraction call.
//!
//! The response contract is versioned. Version 2 (an array of up to three
//! objects carrying `name_of_rental` and `website_link`) is the only one we
//! ask for. Version 1 was a single bare object without those two fields; it is
//! deprecated and only tolerated on the parsing side.

use std::fmt::Write;

use crate::data_models::WebResult;
use crate::town::{self, TOWN};

/// Upper bound on candidates returned to the caller.
pub const MAX_CANDIDATES: usize = 3;

/// Streets embedded in the system instruction as address hints.
pub const SYSTEM_STREET_HINTS: usize = 20;

/// Streets listed in the user prompt reference block.
pub const PROMPT_STREET_REFERENCES: usize = 30;

const OUTPUT_CONTRACT: &str = r#"You must respond with ONLY a raw JSON array (no markdown, no code blocks, no formatting). Format:
[
  {
    "name_of_rental": "string",
    "address": "string",
    "distance_from_drillfield_in_miles": 1,
    "rent_price": "integer or string",
    "num_bedrooms": 2,
    "num_bathrooms": 1,
    "website_link": "string"
  }
]

Return up to 3 rentals from the search results, prioritizing those with specific Blacksburg street addresses.
If you find ANY rental-related results, extract what you can and return them.
Do not return empty array unless NO rental information exists at all.
Do not wrap response in markdown code blocks. Return raw JSON only."#;

const EXTRACTION_INSTRUCTIONS: &str = r#"INSTRUCTIONS:
- Extract rental properties from the search results above
- When you find address information, use specific street names from the reference list when possible
- If you see references to the known housing areas, include those in the address
- Prioritize results that mention specific Blacksburg streets or known housing complexes
- Use the most specific address information available in the search results
- For areas like "near campus" or "university area", try to be more specific if street names are mentioned

Based on the web search results above, extract rental information that matches the user's criteria.
Use the URL from each search result as the website_link.
For distance estimates, only include the number (e.g., 1, not "Estimate 1" or "1 mile").
Return up to 3 rentals, prioritizing those with specific Blacksburg addresses."#;

/// System message defining the housing agent role and output contract.
pub fn system_instruction() -> String {
    format!(
        r#"You are a housing agent that helps users find rentals in {TOWN}. You will be provided with real web search results from rental websites.

Extract rental information from the web search results that match the user's criteria. Only use information from the provided search results - do not make up any data.

For addresses, prioritize using specific street addresses when available. If you find references to these Blacksburg streets, use them:
{streets}

For missing information:
- If exact address not available but area is mentioned, use area name (e.g., "University Terrace area", "Near VT Campus")
- Estimate distance from Drillfield based on location (VT campus = 0-1 miles, downtown = 1-2 miles, etc.)
- For distance_from_drillfield_in_miles, only include the number (e.g., 1, not "Estimate 1")
- If price not mentioned, extract from context or use "Contact for pricing"
- For website_link, use the URL from the search results
- If bedrooms/bathrooms not specified, make reasonable estimates based on property type

{OUTPUT_CONTRACT}
"#,
        streets = town::street_list(SYSTEM_STREET_HINTS),
    )
}

/// Numbered listing of the web results.
pub fn format_web_results(results: &[WebResult]) -> String {
    let mut out = String::from("WEB SEARCH RESULTS:\n\n");
    for (i, result) in results.iter().enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}. {}", i + 1, result.title);
        let _ = writeln!(out, "   Description: {}", result.snippet);
        let _ = writeln!(out, "   URL: {}", result.link);
        let _ = writeln!(out, "   Search Query: {}\n", result.query_used);
    }
    out
}

/// User message: web results, the user's criteria, town reference lists and instructions.
pub fn assemble_prompt(user_query: &str, results: &[WebResult]) -> String {
    format!(
        "\n{web}\n\nUSER SEARCH CRITERIA: {user_query}\n\n\
         BLACKSBURG STREET REFERENCE LIST:\n{streets}\n\n\
         KNOWN HOUSING AREAS IN BLACKSBURG:\n{areas}\n\n\
         {EXTRACTION_INSTRUCTIONS}\n",
        web = format_web_results(results),
        streets = town::street_list(PROMPT_STREET_REFERENCES),
        areas = town::area_list(),
    )
}

/// First `max_chars` characters of a prompt, for debug logging.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
