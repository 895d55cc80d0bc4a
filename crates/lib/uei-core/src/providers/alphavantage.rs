//! Alpha Vantage `query` endpoint: daily equity series and FX rates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult, Provider};

pub const DAILY_SERIES_KEY: &str = "Time Series (Daily)";
pub const EXCHANGE_RATE_KEY: &str = "Realtime Currency Exchange Rate";

/// Explanatory fields Alpha Vantage sends instead of data on bad keys or rate limits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderNotice {
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

impl ProviderNotice {
    fn into_detail(self) -> Option<String> {
        self.error_message.or(self.note).or(self.information)
    }
}

/// Body of `function=TIME_SERIES_DAILY_ADJUSTED`.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    pub series: Option<BTreeMap<String, DailyEntry>>,
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

/// One day of the adjusted daily series. Values stay as the provider's strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyEntry {
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "6. volume")]
    pub volume: String,
}

/// Most recent daily bar for a US equity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsEquityBar {
    pub symbol: String,
    pub date: String,
    pub close: String,
    pub high: String,
    pub low: String,
    pub volume: String,
}

impl DailySeriesResponse {
    /// Picks the greatest date key.
    ///
    /// Keys are `YYYY-MM-DD`, so string order matches calendar order.
    ///
    /// # Errors
    /// Returns [`MarketError::MissingData`] when the series is absent or empty.
    pub fn into_latest_bar(self, symbol: &str) -> MarketResult<UsEquityBar> {
        let Some(series) = self.series else {
            return Err(MarketError::MissingData {
                provider: Provider::AlphaVantage,
                what: DAILY_SERIES_KEY,
                detail: self.notice.into_detail(),
            });
        };
        let (date, entry) = series
            .into_iter()
            .next_back()
            .ok_or_else(|| MarketError::missing(Provider::AlphaVantage, "daily entries"))?;
        Ok(UsEquityBar {
            symbol: symbol.to_string(),
            date,
            close: entry.close,
            high: entry.high,
            low: entry.low,
            volume: entry.volume,
        })
    }
}

/// Body of `function=CURRENCY_EXCHANGE_RATE`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateResponse {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    pub rate: Option<ExchangeRateEntry>,
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateEntry {
    #[serde(rename = "5. Exchange Rate")]
    pub exchange_rate: String,
    #[serde(rename = "6. Last Refreshed")]
    pub last_refreshed: String,
}

/// Spot FX rate and the provider's refresh timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxRate {
    pub rate: String,
    pub time: String,
}

impl ExchangeRateResponse {
    /// # Errors
    /// Returns [`MarketError::MissingData`] when the rate object is absent.
    pub fn into_rate(self) -> MarketResult<FxRate> {
        let Some(entry) = self.rate else {
            return Err(MarketError::MissingData {
                provider: Provider::AlphaVantage,
                what: EXCHANGE_RATE_KEY,
                detail: self.notice.into_detail(),
            });
        };
        Ok(FxRate {
            rate: entry.exchange_rate,
            time: entry.last_refreshed,
        })
    }
}
