use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_SERPAPI_ENDPOINT: &str = "https://serpapi.com/search.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, built once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub serpapi_key: String,
    pub serpapi_endpoint: String,
    pub http_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Loads the env file into the process environment and reads the config from it.
    /// A missing env file is fatal.
    pub fn load(env_file: &Path) -> Result<Config, ConfigError> {
        if !env_file.exists() {
            return Err(ConfigError::MissingEnvFile(env_file.to_path_buf()));
        }
        dotenvy::from_path(env_file).map_err(|source| ConfigError::EnvFile {
            path: env_file.to_path_buf(),
            source,
        })?;
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = get_env_or_default(&var, "HTTP_TIMEOUT_SECS", "");
        let http_timeout = if timeout_secs.is_empty() {
            Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
        } else {
            let secs = timeout_secs
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid {
                    key: "HTTP_TIMEOUT_SECS",
                    value: timeout_secs.clone(),
                })?;
            Duration::from_secs(secs)
        };

        let bind = get_env_or_default(&var, "BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;

        Ok(Config {
            openai_api_key: get_env(&var, "OPENAI_API_KEY")?,
            openai_model: get_env_or_default(&var, "OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            serpapi_key: get_env(&var, "SERPAPI_KEY")?,
            serpapi_endpoint: get_env_or_default(&var, "SERPAPI_ENDPOINT", DEFAULT_SERPAPI_ENDPOINT),
            http_timeout,
            bind_addr,
        })
    }
}

fn get_env<F>(var: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingVar(key)),
    }
}

fn get_env_or_default<F>(var: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
