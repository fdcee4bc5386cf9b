mod client;
mod basic;

pub use client::HttpClient;
pub use basic::BasicClient;

use crate::error::{MetricsError, Result};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// GETs `url` with `query` appended and decodes the JSON body.
///
/// Any transport failure, non-success status (including 404) or undecodable
/// body becomes [`MetricsError::Upstream`].
pub async fn fetch_json<C: HttpClient, T: DeserializeOwned>(
    client: &C,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    fetch_json_opt(client, url, query)
        .await?
        .ok_or_else(|| MetricsError::Upstream {
            url: url.to_string(),
            status: Some(StatusCode::NOT_FOUND.as_u16()),
            message: "Not Found".to_string(),
        })
}

/// Like [`fetch_json`], but a 404 means "no data" and yields `Ok(None)`.
pub async fn fetch_json_opt<C: HttpClient, T: DeserializeOwned>(
    client: &C,
    url: &str,
    query: &[(&str, String)],
) -> Result<Option<T>> {
    let parsed = if query.is_empty() {
        Url::parse(url)
    } else {
        Url::parse_with_params(url, query)
    };
    let url = parsed.map_err(|e| MetricsError::Config(format!("invalid url '{url}': {e}")))?;
    let url_str = url.to_string();

    debug!(url = %url_str, "GET");
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await.map_err(|e| MetricsError::Upstream {
        url: url_str.clone(),
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    })?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        debug!(url = %url_str, "No data (404)");
        return Ok(None);
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
        };
        return Err(MetricsError::Upstream {
            url: url_str,
            status: Some(status.as_u16()),
            message,
        });
    }

    let value = resp.json::<T>().await.map_err(|e| MetricsError::Upstream {
        url: url_str.clone(),
        status: Some(status.as_u16()),
        message: format!("failed to parse response: {e}"),
    })?;

    Ok(Some(value))
}
