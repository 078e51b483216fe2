use anyhow::Result;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

/// GET `url` and return its body. Anything but a 200 is an error; reporting
/// it is left to the caller.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    let resp = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| transport(url, source))?;

    let status = resp.status();
    if status != StatusCode::OK {
        debug!(%url, %status, "unexpected status");
        return Err(ScrapeError::UnexpectedStatus {
            url: url.clone(),
            status,
        }
        .into());
    }

    let body = resp.text().await.map_err(|source| transport(url, source))?;
    debug!(%url, bytes = body.len(), "page fetched");
    Ok(body)
}

fn transport(url: &Url, source: reqwest::Error) -> ScrapeError {
    debug!(%url, error = %source, "request failed");
    ScrapeError::Transport {
        url: url.clone(),
        source,
    }
}
