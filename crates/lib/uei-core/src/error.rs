use std::fmt;

use reqwest::StatusCode;

/// Upstream data provider a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Brapi,
    AlphaVantage,
    Fred,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brapi => "brapi",
            Self::AlphaVantage => "alphavantage",
            Self::Fred => "fred",
        };
        f.write_str(name)
    }
}

pub type MarketResult<T> = Result<T, MarketError>;

/// Failure modes of a market lookup. None of them are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("{provider} returned HTTP {status} for {url}")]
    Status {
        provider: Provider,
        status: StatusCode,
        url: String,
    },

    #[error("{provider} request failed: {source}")]
    Transport {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} response could not be decoded: {source}")]
    Decode {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} response is missing {what}{}", detail_suffix(.detail.as_deref()))]
    MissingData {
        provider: Provider,
        what: &'static str,
        detail: Option<String>,
    },

    #[error("unsupported treasury tenor: {0} (expected one of 2, 5, 10, 30)")]
    UnsupportedTenor(i64),

    #[error("invalid {provider} endpoint: {message}")]
    InvalidUrl {
        provider: Provider,
        message: String,
    },
}

impl MarketError {
    pub(crate) const fn missing(provider: Provider, what: &'static str) -> Self {
        Self::MissingData {
            provider,
            what,
            detail: None,
        }
    }

    /// Returns the provider involved, if the failure came from an upstream call.
    #[must_use]
    pub const fn provider(&self) -> Option<Provider> {
        match self {
            Self::Status { provider, .. }
            | Self::Transport { provider, .. }
            | Self::Decode { provider, .. }
            | Self::MissingData { provider, .. }
            | Self::InvalidUrl { provider, .. } => Some(*provider),
            Self::UnsupportedTenor(_) => None,
        }
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|detail| format!(" ({detail})")).unwrap_or_default()
}
