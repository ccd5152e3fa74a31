use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::data_models::SearchFilters;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    /// Kept loose so a malformed filter block does not reject the whole request.
    #[serde(default)]
    pub filters: Option<Value>,
}

impl SearchRequest {
    pub fn filters(&self) -> SearchFilters {
        match &self.filters {
            None | Some(Value::Null) => SearchFilters::default(),
            Some(raw) => {
                if !raw.is_object() {
                    tracing::warn!("ignoring malformed filters {raw}");
                }
                SearchFilters::from_value(raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_filter_beside_valid_one() {
        let request: SearchRequest = serde_json::from_value(json!({
            "query": "apartment",
            "filters": {"maxRent": 1500, "minBeds": -1}
        }))
        .unwrap();
        assert_eq!(
            request.filters().apply("apartment"),
            "apartment under $1500 -1 bedroom"
        );
    }

    #[test]
    fn test_missing_filters_are_default() {
        let request: SearchRequest =
            serde_json::from_value(json!({"query": "house", "filters": null})).unwrap();
        assert_eq!(request.filters(), SearchFilters::default());
    }
}

#[derive(Debug, Deserialize)]
pub struct SiteSearchRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub property_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
