use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Optional numeric filters sent alongside the free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub max_rent: Option<i64>,
    #[serde(default)]
    pub min_beds: Option<i64>,
    #[serde(default)]
    pub min_baths: Option<i64>,
}

impl SearchFilters {
    /// Reads each filter on its own. A field that is missing, null or not an
    /// integer is left unset without affecting the others.
    pub fn from_value(raw: &serde_json::Value) -> SearchFilters {
        let field = |key: &str| raw.get(key).and_then(serde_json::Value::as_i64);
        SearchFilters {
            max_rent: field("maxRent"),
            min_beds: field("minBeds"),
            min_baths: field("minBaths"),
        }
    }

    /// Appends each set filter to the query as a trailing clause.
    /// Zero counts as unset.
    pub fn apply(&self, query: &str) -> String {
        let mut enhanced = query.to_string();
        if let Some(rent) = self.max_rent.filter(|v| *v != 0) {
            enhanced.push_str(&format!(" under ${rent}"));
        }
        if let Some(beds) = self.min_beds.filter(|v| *v != 0) {
            enhanced.push_str(&format!(" {beds} bedroom"));
        }
        if let Some(baths) = self.min_baths.filter(|v| *v != 0) {
            enhanced.push_str(&format!(" {baths} bathroom"));
        }
        enhanced
    }
}

/// One organic hit kept for prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub query_used: String,
}

/// Rent is usually a number, but the model may answer "Contact for pricing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RentPrice {
    Amount(i64),
    Decimal(f64),
    Text(String),
}

/// A rental as the model describes it. Only used to read fields for logging;
/// the response body is passed through as returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalCandidate {
    #[serde(default)]
    pub name_of_rental: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub distance_from_drillfield_in_miles: Option<serde_json::Value>,
    #[serde(default)]
    pub rent_price: Option<RentPrice>,
    #[serde(default)]
    pub num_bedrooms: Option<serde_json::Value>,
    #[serde(default)]
    pub num_bathrooms: Option<serde_json::Value>,
    #[serde(default)]
    pub website_link: Option<String>,
}

impl RentalCandidate {
    pub fn from_value(value: &serde_json::Value) -> Option<RentalCandidate> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// First matching listing found on one rental site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLink {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// Keyed by site short name (`zillow`, `apartments_com`, `rent_com`).
pub type SiteLookupResult = BTreeMap<String, SiteLink>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filters_appended_in_order() {
        let filters = SearchFilters {
            max_rent: Some(1500),
            min_beds: Some(2),
            min_baths: Some(1),
        };
        assert_eq!(
            filters.apply("apartment near campus"),
            "apartment near campus under $1500 2 bedroom 1 bathroom"
        );
    }

    #[test]
    fn test_unset_and_zero_filters_skipped() {
        let filters = SearchFilters {
            max_rent: Some(0),
            min_beds: None,
            min_baths: Some(2),
        };
        assert_eq!(filters.apply("house"), "house 2 bathroom");
        assert_eq!(SearchFilters::default().apply("house"), "house");
    }

    #[test]
    fn test_filters_deserialize_nulls() {
        let filters: SearchFilters =
            serde_json::from_value(json!({"maxRent": null, "minBeds": 3})).unwrap();
        assert_eq!(filters.max_rent, None);
        assert_eq!(filters.min_beds, Some(3));
        assert_eq!(filters.min_baths, None);
    }

    #[test]
    fn test_bad_filter_keeps_the_others() {
        let filters = SearchFilters::from_value(&json!({
            "maxRent": 1500,
            "minBeds": -1,
            "minBaths": "two"
        }));
        assert_eq!(filters.max_rent, Some(1500));
        assert_eq!(filters.min_beds, Some(-1));
        assert_eq!(filters.min_baths, None);
        assert_eq!(
            filters.apply("apartment"),
            "apartment under $1500 -1 bedroom"
        );
    }

    #[test]
    fn test_filters_from_non_object() {
        assert_eq!(SearchFilters::from_value(&json!("cheap")), SearchFilters::default());
        assert_eq!(
            SearchFilters::from_value(&json!({"maxRent": 12.5, "minBeds": 2})),
            SearchFilters {
                max_rent: None,
                min_beds: Some(2),
                min_baths: None,
            }
        );
    }

    #[test]
    fn test_candidate_with_decimal_rent() {
        let value = json!({
            "name_of_rental": "Terrace View",
            "address": "1700 Terrace View Drive",
            "rent_price": 1200.5
        });
        let candidate = RentalCandidate::from_value(&value).unwrap();
        assert_eq!(candidate.rent_price, Some(RentPrice::Decimal(1200.5)));
        assert_eq!(candidate.name_of_rental.as_deref(), Some("Terrace View"));
        assert_eq!(candidate.address.as_deref(), Some("1700 Terrace View Drive"));
    }

    #[test]
    fn test_candidate_reads_loose_fields() {
        let value = json!({
            "name_of_rental": "The Edge",
            "address": "1101 Combs Dr",
            "distance_from_drillfield_in_miles": 1,
            "rent_price": "Contact for pricing",
            "num_bedrooms": 2,
            "num_bathrooms": 2,
            "website_link": "https://www.apartments.com/the-edge"
        });
        let candidate = RentalCandidate::from_value(&value).unwrap();
        assert_eq!(candidate.name_of_rental.as_deref(), Some("The Edge"));
        assert_eq!(
            candidate.rent_price,
            Some(RentPrice::Text("Contact for pricing".to_string()))
        );

        let bare = RentalCandidate::from_value(&json!({"rent_price": 950})).unwrap();
        assert_eq!(bare.rent_price, Some(RentPrice::Amount(950)));
        assert_eq!(bare.address, None);
    }
}
