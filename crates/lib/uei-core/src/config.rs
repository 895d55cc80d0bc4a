//! Read-only provider configuration shared by every lookup.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{MarketError, MarketResult, Provider};

pub const DEFAULT_BRAPI_BASE_URL: &str = "https://brapi.dev";
pub const DEFAULT_ALPHAVANTAGE_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_FRED_BASE_URL: &str = "https://api.stlouisfed.org";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API credentials for the upstream providers.
///
/// Empty values are allowed; the provider rejects the request instead.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub brapi_token: String,
    pub alphavantage_api_key: String,
    pub fred_api_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(
        brapi_token: impl Into<String>,
        alphavantage_api_key: impl Into<String>,
        fred_api_key: impl Into<String>,
    ) -> Self {
        Self {
            brapi_token: brapi_token.into(),
            alphavantage_api_key: alphavantage_api_key.into(),
            fred_api_key: fred_api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("brapi_token", &redact(&self.brapi_token))
            .field("alphavantage_api_key", &redact(&self.alphavantage_api_key))
            .field("fred_api_key", &redact(&self.fred_api_key))
            .finish()
    }
}

const fn redact(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Base URLs for the three providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub brapi: Url,
    pub alphavantage: Url,
    pub fred: Url,
}

impl ProviderEndpoints {
    /// Parses and validates the three base URLs.
    ///
    /// # Errors
    /// Returns [`MarketError::InvalidUrl`] if a value is not an absolute http(s) URL.
    pub fn parse(brapi: &str, alphavantage: &str, fred: &str) -> MarketResult<Self> {
        Ok(Self {
            brapi: parse_base(Provider::Brapi, brapi)?,
            alphavantage: parse_base(Provider::AlphaVantage, alphavantage)?,
            fred: parse_base(Provider::Fred, fred)?,
        })
    }

    /// Returns the base URL configured for `provider`.
    #[must_use]
    pub const fn base(&self, provider: Provider) -> &Url {
        match provider {
            Provider::Brapi => &self.brapi,
            Provider::AlphaVantage => &self.alphavantage,
            Provider::Fred => &self.fred,
        }
    }
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self::parse(
            DEFAULT_BRAPI_BASE_URL,
            DEFAULT_ALPHAVANTAGE_BASE_URL,
            DEFAULT_FRED_BASE_URL,
        )
        .expect("valid default provider URLs")
    }
}

fn parse_base(provider: Provider, value: &str) -> MarketResult<Url> {
    let url = Url::parse(value.trim()).map_err(|err| MarketError::InvalidUrl {
        provider,
        message: format!("{value}: {err}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(MarketError::InvalidUrl {
            provider,
            message: format!("{value}: expected an http(s) base URL"),
        });
    }
    Ok(url)
}

/// Configuration for the market client, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub credentials: Credentials,
    pub endpoints: ProviderEndpoints,
    pub request_timeout: Duration,
}

impl MarketConfig {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: ProviderEndpoints::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}
