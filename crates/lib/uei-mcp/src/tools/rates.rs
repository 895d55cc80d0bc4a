use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{UeiMcp, helpers};

/// Parameters for a Treasury yield lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TreasuryYieldParams {
    /// Maturity in years: 2, 5, 10 or 30.
    pub tenor: i64,
}

#[tool_router(router = tool_router_rates, vis = "pub")]
impl UeiMcp {
    #[tool(description = "Latest FRED Treasury yield; tenor is 2, 5, 10 or 30 years.")]
    async fn treasury_yield(
        &self,
        Parameters(params): Parameters<TreasuryYieldParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let observation = self
            .market()
            .treasury_yield(params.tenor)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(observation)?]))
    }

    #[tool(description = "Spot USD/BRL exchange rate: rate, time.")]
    async fn usdbrl(&self) -> Result<CallToolResult, ErrorData> {
        let rate = self.market().usdbrl().await.map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(rate)?]))
    }
}
