pub mod api;
pub mod completion;
pub mod config;
pub mod data_models;
pub mod error;
pub mod prompt;
pub mod query_expander;
pub mod rental_search;
pub mod sanitizer;
pub mod site_lookup;
pub mod town;
pub mod web_search;
