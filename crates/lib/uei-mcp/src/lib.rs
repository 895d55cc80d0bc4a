//! MCP server implementation for uei-mcp.
//!
//! This crate wires the market client into rmcp tool handlers and exposes the
//! MCP-facing tool surface for B3 quotes, US equities, Treasury yields and the
//! USD/BRL rate.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use uei_core::market::MarketClient;

pub const DEFAULT_SERVER_NAME: &str = "united-exchange-investments";

const SERVER_INSTRUCTIONS: &str = r"uei-mcp provides read-only market data lookups.

Tools:
- `b3_quote` (ticker): latest B3 quote from brapi.dev, e.g. `PETR4`, `VALE3`.
- `us_equity` (symbol): most recent daily bar for a US stock or ETF from Alpha Vantage.
- `treasury_yield` (tenor): latest constant-maturity US Treasury yield from FRED;
  tenor is 2, 5, 10 or 30.
- `usdbrl`: spot USD/BRL exchange rate from Alpha Vantage.

Notes:
- Each call makes exactly one upstream request; nothing is cached or retried.
- Prices, volumes and rates from Alpha Vantage and FRED are returned as the provider's strings.
- FRED reports a missing observation as `.`; it is passed through unchanged.
- Use `help` for the tool list and `health` to check the server.";

/// MCP server wrapper around the market client and tool routers.
#[derive(Clone)]
pub struct UeiMcp {
    tool_router: ToolRouter<Self>,
    market: Arc<MarketClient>,
    name: Arc<str>,
}

impl UeiMcp {
    /// Creates a new server using a market client by value.
    #[must_use]
    pub fn new(market: MarketClient) -> Self {
        Self::with_market(Arc::new(market))
    }

    /// Creates a new server using a shared market client.
    #[must_use]
    pub fn with_market(market: Arc<MarketClient>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_quotes()
            + Self::tool_router_rates()
            + Self::tool_router_context();
        Self {
            tool_router,
            market,
            name: Arc::from(DEFAULT_SERVER_NAME),
        }
    }

    /// Overrides the server name reported during initialization.
    #[must_use]
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = Arc::from(name.as_ref());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered tool names, sorted.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }

    pub(crate) fn market(&self) -> &MarketClient {
        &self.market
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl UeiMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for UeiMcp {
    fn get_info(&self) -> ServerInfo {
        let capabilities = ServerCapabilities::builder().enable_tools().build();
        ServerInfo::new(capabilities)
            .with_server_info(Implementation::new(
                self.name.to_string(),
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(SERVER_INSTRUCTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uei_core::config::MarketConfig;

    fn server() -> UeiMcp {
        UeiMcp::new(MarketClient::new(MarketConfig::default()))
    }

    #[test]
    fn registry_contains_every_tool() {
        assert_eq!(
            server().tool_names(),
            ["b3_quote", "health", "help", "treasury_yield", "us_equity", "usdbrl"]
        );
    }

    #[test]
    fn treasury_yield_schema_requires_integer_tenor() {
        let tool = server()
            .tool_router
            .list_all()
            .into_iter()
            .find(|tool| tool.name == "treasury_yield")
            .expect("treasury_yield should be registered");
        let schema = serde_json::Value::Object((*tool.input_schema).clone());

        assert_eq!(schema["properties"]["tenor"]["type"], "integer");
        assert!(
            schema["required"]
                .as_array()
                .is_some_and(|required| required.iter().any(|name| name == "tenor"))
        );
    }

    #[test]
    fn server_info_reports_configured_name() {
        let info = server().with_name("uei-test").get_info();
        assert_eq!(info.server_info.name, "uei-test");
        assert!(info.capabilities.tools.is_some());
    }
}
