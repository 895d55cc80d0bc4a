//! brapi.dev quote endpoint (B3 equities).

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult, Provider};

/// Body of `GET /api/quote/{ticker}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub results: Vec<QuoteEntry>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of the `results` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEntry {
    pub symbol: String,
    pub regular_market_price: f64,
    pub regular_market_change_percent: f64,
    pub currency: String,
    pub exchange_name: String,
}

/// Latest quote for a B3 ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B3Quote {
    pub ticker: String,
    pub price: f64,
    pub change_percent: f64,
    pub currency: String,
    pub exchange: String,
}

impl QuoteResponse {
    /// Takes the first result.
    ///
    /// # Errors
    /// Returns [`MarketError::MissingData`] when `results` is empty or absent.
    pub fn into_quote(self) -> MarketResult<B3Quote> {
        let Some(entry) = self.results.into_iter().next() else {
            return Err(MarketError::MissingData {
                provider: Provider::Brapi,
                what: "results[0]",
                detail: self.message,
            });
        };
        Ok(B3Quote {
            ticker: entry.symbol,
            price: entry.regular_market_price,
            change_percent: entry.regular_market_change_percent,
            currency: entry.currency,
            exchange: entry.exchange_name,
        })
    }
}
