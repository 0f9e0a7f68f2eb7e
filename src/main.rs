use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::EnvFilter;

use twitter_search_mcp::TwitterSearchService;
use twitter_search_mcp::twitter::config::{API_KEY_ENV, DEFAULT_API_HOST, TwitterConfig};

/// MCP server exposing Twitter search tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RapidAPI key for the twitter154 API (checked when a tool is first called)
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// RapidAPI host identifier
    #[arg(long, env = "RAPIDAPI_HOST", default_value = DEFAULT_API_HOST)]
    api_host: String,

    /// Override the upstream base URL (defaults to https://<api-host>)
    #[arg(long, env = "TWITTER_SEARCH_BASE_URL")]
    base_url: Option<String>,
}

impl Args {
    fn into_config(self) -> TwitterConfig {
        let config = TwitterConfig::new(self.api_key).with_api_host(self.api_host);
        match self.base_url {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting MCP Twitter search server on stdio...");

    let config = args.into_config();
    if config.api_key().is_none() {
        tracing::warn!("{} is not set; tool calls will report an error", API_KEY_ENV);
    }
    tracing::info!("Using upstream {}", config.search_url());

    let twitter_service = TwitterSearchService::new(config)?;

    // Serve using stdio transport
    let service = twitter_service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}
