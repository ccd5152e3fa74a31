use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;

use crate::data_models::SiteLookupResult;

use super::AppState;
use super::models::{ApiError, HealthResponse, SearchRequest, SiteSearchRequest};

pub const QUERY_REQUIRED: &str = "Query is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";

/// Body is parsed by hand so every malformed body maps to the same 400.
fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Option<T> {
    serde_json::from_slice(body).ok()
}

pub async fn search_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    let request: SearchRequest = parse_body(&body).ok_or(ApiError::BadRequest(QUERY_REQUIRED))?;
    let query = request
        .query
        .as_deref()
        .ok_or(ApiError::BadRequest(QUERY_REQUIRED))?;

    let enhanced_query = request.filters().apply(query);
    tracing::info!("processing search: {enhanced_query}");

    let outcome = state.rentals.search(&enhanced_query).await;
    Ok(Json(outcome.into_candidates()))
}

pub async fn search_sites_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SiteLookupResult>, ApiError> {
    let request: SiteSearchRequest =
        parse_body(&body).ok_or(ApiError::BadRequest(ADDRESS_REQUIRED))?;
    let address = request
        .address
        .as_deref()
        .ok_or(ApiError::BadRequest(ADDRESS_REQUIRED))?;

    tracing::info!("searching specific sites for address: {address}");
    let results = state
        .sites
        .lookup(address, request.property_name.as_deref())
        .await;
    Ok(Json(results))
}

pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
