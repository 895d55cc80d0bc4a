//! The four market lookups exposed as MCP tools.

use std::sync::Arc;

use url::Url;

use crate::config::MarketConfig;
use crate::error::{MarketResult, Provider};
use crate::fetch::{endpoint, get_json};
use crate::providers::alphavantage::{
    DailySeriesResponse,
    ExchangeRateResponse,
    FxRate,
    UsEquityBar,
};
use crate::providers::brapi::{B3Quote, QuoteResponse};
use crate::providers::fred::{ObservationsResponse, Tenor, TreasuryObservation};

/// Market data client holding the read-only provider configuration.
///
/// Cloning is cheap; clones share the same configuration.
#[derive(Debug, Clone)]
pub struct MarketClient {
    config: Arc<MarketConfig>,
}

impl MarketClient {
    #[must_use]
    pub fn new(config: MarketConfig) -> Self {
        Self::with_config(Arc::new(config))
    }

    #[must_use]
    pub const fn with_config(config: Arc<MarketConfig>) -> Self {
        Self { config }
    }

    /// Latest quote for a B3 ticker from brapi.dev.
    ///
    /// # Errors
    /// Propagates any [`crate::error::MarketError`]; an empty `results` list is
    /// reported as missing data.
    pub async fn b3_quote(&self, ticker: &str) -> MarketResult<B3Quote> {
        let url = self.url(Provider::Brapi, &["api", "quote", ticker])?;
        let params = [
            ("range", "1d"),
            ("interval", "1d"),
            ("token", self.config.credentials.brapi_token.as_str()),
        ];
        let response: QuoteResponse = self.get(Provider::Brapi, url, &params).await?;
        response.into_quote()
    }

    /// Most recent daily bar for a US equity from Alpha Vantage.
    ///
    /// # Errors
    /// Propagates any [`crate::error::MarketError`]; a payload without the daily
    /// series is reported as missing data.
    pub async fn us_equity(&self, symbol: &str) -> MarketResult<UsEquityBar> {
        let url = self.url(Provider::AlphaVantage, &["query"])?;
        let params = [
            ("function", "TIME_SERIES_DAILY_ADJUSTED"),
            ("symbol", symbol),
            ("apikey", self.config.credentials.alphavantage_api_key.as_str()),
        ];
        let response: DailySeriesResponse = self.get(Provider::AlphaVantage, url, &params).await?;
        response.into_latest_bar(symbol)
    }

    /// Latest constant-maturity Treasury yield observation from FRED.
    ///
    /// The tenor is checked before any request is sent.
    ///
    /// # Errors
    /// Returns [`crate::error::MarketError::UnsupportedTenor`] for tenors other
    /// than 2, 5, 10 and 30; otherwise propagates the upstream failure.
    pub async fn treasury_yield(&self, tenor: i64) -> MarketResult<TreasuryObservation> {
        let tenor = Tenor::try_from(tenor)?;
        let url = self.url(Provider::Fred, &["fred", "series", "observations"])?;
        let params = [
            ("series_id", tenor.series_id()),
            ("api_key", self.config.credentials.fred_api_key.as_str()),
            ("file_type", "json"),
        ];
        let response: ObservationsResponse = self.get(Provider::Fred, url, &params).await?;
        response.into_latest()
    }

    /// Spot USD/BRL rate from Alpha Vantage.
    ///
    /// # Errors
    /// Propagates any [`crate::error::MarketError`].
    pub async fn usdbrl(&self) -> MarketResult<FxRate> {
        let url = self.url(Provider::AlphaVantage, &["query"])?;
        let params = [
            ("function", "CURRENCY_EXCHANGE_RATE"),
            ("from_currency", "USD"),
            ("to_currency", "BRL"),
            ("apikey", self.config.credentials.alphavantage_api_key.as_str()),
        ];
        let response: ExchangeRateResponse = self.get(Provider::AlphaVantage, url, &params).await?;
        response.into_rate()
    }

    fn url(&self, provider: Provider, segments: &[&str]) -> MarketResult<Url> {
        endpoint(provider, self.config.endpoints.base(provider), segments)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        provider: Provider,
        url: Url,
        params: &[(&str, &str)],
    ) -> MarketResult<T> {
        get_json(provider, url, params, self.config.request_timeout).await
    }
}
