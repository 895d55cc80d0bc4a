//! Daemon entry point for the uei MCP server.
//!
//! Loads configuration from the command line, the environment and an
//! optional `.env` file in the working directory, builds the market client,
//! and serves the MCP protocol over streamable HTTP or stdio.

mod config;

use tracing::info;
use tracing_subscriber::EnvFilter;
use uei_core::market::MarketClient;
use uei_mcp::UeiMcp;
use uei_mcp::server::{serve_stdio, serve_streamable_http};

use crate::config::UeiConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = UeiConfig::from_args()?;
    info!(credentials = ?config.market.credentials, "uei-mcpd starting");

    let service = UeiMcp::new(MarketClient::new(config.market)).with_name(&config.server_name);
    if config.enable_stdio {
        serve_stdio(service).await
    } else {
        serve_streamable_http(service, config.http).await
    }
}
