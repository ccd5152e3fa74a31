use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no env file found at {0}, create one with OPENAI_API_KEY and SERPAPI_KEY")]
    MissingEnvFile(PathBuf),

    #[error("failed to read env file {path}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Failures talking to the search or completion APIs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("search request failed: {0}")]
    Search(#[from] reqwest::Error),

    #[error("search API returned status {status}: {body}")]
    SearchStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion request failed: {0}")]
    Completion(#[from] async_openai::error::OpenAIError),

    #[error("failed to build completion HTTP client: {0}")]
    CompletionClient(#[source] reqwest::Error),

    #[error("completion response had no content")]
    EmptyCompletion,
}
