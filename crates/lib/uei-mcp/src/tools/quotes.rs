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

/// Parameters for a B3 quote lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct B3QuoteParams {
    /// B3 ticker symbol, e.g. `PETR4`.
    pub ticker: String,
}

/// Parameters for a US equity lookup.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct UsEquityParams {
    /// US stock or ETF symbol, e.g. `AAPL`.
    pub symbol: String,
}

#[tool_router(router = tool_router_quotes, vis = "pub")]
impl UeiMcp {
    #[tool(description = "Latest B3 quote: ticker, price, change_percent, currency, exchange.")]
    async fn b3_quote(
        &self,
        Parameters(params): Parameters<B3QuoteParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let quote = self
            .market()
            .b3_quote(&params.ticker)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(quote)?]))
    }

    #[tool(description = "Latest daily bar for a US stock or ETF: date, close, high, low, volume.")]
    async fn us_equity(
        &self,
        Parameters(params): Parameters<UsEquityParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let bar = self
            .market()
            .us_equity(&params.symbol)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(bar)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::tools::test_support::{json_payload, server_for};

    #[tokio::test]
    async fn b3_quote_returns_renamed_fields() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quote/VALE3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "symbol": "VALE3",
                    "regularMarketPrice": 61.2,
                    "regularMarketChangePercent": -0.8,
                    "currency": "BRL",
                    "exchangeName": "SAO"
                }]
            })))
            .mount(&mock)
            .await;

        let result = server_for(&mock)
            .b3_quote(Parameters(B3QuoteParams { ticker: "VALE3".to_string() }))
            .await
            .expect("tool call");

        assert_eq!(
            json_payload(&result),
            json!({
                "ticker": "VALE3",
                "price": 61.2,
                "change_percent": -0.8,
                "currency": "BRL",
                "exchange": "SAO"
            })
        );
    }

    #[tokio::test]
    async fn b3_quote_empty_results_is_an_error() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&mock)
            .await;

        let err = server_for(&mock)
            .b3_quote(Parameters(B3QuoteParams { ticker: "NOPE3".to_string() }))
            .await
            .expect_err("empty results");

        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("results[0]"));
    }

    #[tokio::test]
    async fn us_equity_rate_limit_payload_is_an_error() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Information": "Our standard API rate limit is 25 requests per day."
            })))
            .mount(&mock)
            .await;

        let err = server_for(&mock)
            .us_equity(Parameters(UsEquityParams { symbol: "AAPL".to_string() }))
            .await
            .expect_err("no series");

        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("rate limit"));
    }
}
