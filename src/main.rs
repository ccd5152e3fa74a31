use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hokie_homes::api::{AppState, create_router};
use hokie_homes::completion::OpenAiCompletion;
use hokie_homes::config::{Config, DEFAULT_ENV_FILE};
use hokie_homes::rental_search::RentalSearch;
use hokie_homes::site_lookup::SiteLookup;
use hokie_homes::web_search::{SearchBackend, SerpApiClient};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Rental search API for Blacksburg, VA")]
struct Args {
    /// Env file holding OPENAI_API_KEY and SERPAPI_KEY
    #[arg(long, env = "ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Overrides BIND_ADDR from the env file
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = Config::load(&args.env_file)?;
    let bind_addr = args.bind.unwrap_or(config.bind_addr);

    let search: Arc<dyn SearchBackend> =
        Arc::new(SerpApiClient::new(&config).context("failed to build search client")?);
    let completion =
        Arc::new(OpenAiCompletion::new(&config).context("failed to build completion client")?);

    let state = AppState {
        rentals: Arc::new(RentalSearch::new(search.clone(), completion)),
        sites: Arc::new(SiteLookup::new(search)),
    };

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("listening on {bind_addr}");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
