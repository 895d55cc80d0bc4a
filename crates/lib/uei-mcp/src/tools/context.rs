use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::UeiMcp;

/// Payload listing the market tools and their inputs.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ToolCatalog {
    pub tools: Vec<String>,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self {
            tools: vec![
                "help - List the market tools exposed by this server.".to_string(),
                "health - Returns 'ok' when the server is up.".to_string(),
                "b3_quote(ticker) - Latest B3 quote from brapi.dev.".to_string(),
                "us_equity(symbol) - Latest daily close/high/low/volume from Alpha Vantage."
                    .to_string(),
                "treasury_yield(tenor) - Latest FRED Treasury yield for tenor 2, 5, 10 or 30."
                    .to_string(),
                "usdbrl - Spot USD/BRL rate from Alpha Vantage.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl UeiMcp {
    #[tool(description = "List the market tools exposed by this server and their inputs.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(ToolCatalog::default())?]))
    }
}
