//! One-shot HTTP GET helper shared by every provider lookup.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{MarketError, MarketResult, Provider};

/// Appends path segments to a provider base URL.
///
/// Segments are percent-encoded, so a ticker can never escape its path slot.
///
/// # Errors
/// Returns [`MarketError::InvalidUrl`] if `base` cannot carry a path.
pub fn endpoint(provider: Provider, base: &Url, segments: &[&str]) -> MarketResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| MarketError::InvalidUrl {
            provider,
            message: format!("{base} cannot be used as a base URL"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Issues a single GET and decodes the JSON body into `T`.
///
/// Every call builds and drops its own client; nothing is retried.
///
/// # Errors
/// Returns [`MarketError::Transport`] for connection failures and timeouts,
/// [`MarketError::Status`] for non-2xx responses and [`MarketError::Decode`]
/// when the body does not match `T`.
pub async fn get_json<T: DeserializeOwned>(
    provider: Provider,
    url: Url,
    params: &[(&str, &str)],
    timeout: Duration,
) -> MarketResult<T> {
    // reqwest errors embed the request URL, query credentials included.
    let transport = |source: reqwest::Error| MarketError::Transport {
        provider,
        source: source.without_url(),
    };

    let client = Client::builder().timeout(timeout).build().map_err(transport)?;

    debug!(
        %provider,
        host = url.host_str().unwrap_or_default(),
        path = url.path(),
        "upstream request"
    );
    let response = client
        .get(url.clone())
        .query(params)
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(MarketError::Status {
            provider,
            status,
            url: url.to_string(),
        });
    }

    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|source| MarketError::Decode { provider, source })
}
