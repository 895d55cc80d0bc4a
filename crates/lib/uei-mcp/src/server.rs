//! MCP server runners for uei-mcp.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::UeiMcp;

/// Configuration for the MCP streamable HTTP server.
///
/// Defaults to stateless mode with plain JSON responses: no session is kept
/// between requests and each reply is a single `application/json` body.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub json_response: bool,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: false,
            json_response: true,
        }
    }

    #[must_use]
    pub const fn with_stateful_mode(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }

    #[must_use]
    pub const fn with_json_response(mut self, json_response: bool) -> Self {
        self.json_response = json_response;
        self
    }

    /// Transport settings handed to rmcp.
    ///
    /// Plain JSON replies are only available without sessions; a stateful
    /// server always streams.
    #[must_use]
    pub fn transport_config(&self) -> StreamableHttpServerConfig {
        StreamableHttpServerConfig {
            stateful_mode: self.stateful_mode,
            json_response: self.json_response && !self.stateful_mode,
            ..Default::default()
        }
    }
}

impl Default for McpHttpServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1:8000".parse().expect("valid MCP HTTP address"))
    }
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(service: UeiMcp) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(name = service.name(), "serving MCP over stdio");
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Builds the axum router with the MCP service mounted at `/mcp`.
#[must_use]
pub fn router(service: UeiMcp, config: &McpHttpServerConfig) -> Router {
    let mcp: StreamableHttpService<UeiMcp, LocalSessionManager> = StreamableHttpService::new(
        move || Ok(service.clone()),
        Arc::new(LocalSessionManager::default()),
        config.transport_config(),
    );

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", mcp)
}

/// Serves the MCP server using streamable HTTP transport until Ctrl-C.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    service: UeiMcp,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let name = service.name().to_string();
    let app = router(service, &config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!(
        %name,
        addr = %config.addr,
        stateful = config.stateful_mode,
        json_response = config.json_response,
        "serving MCP over streamable HTTP at /mcp"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
