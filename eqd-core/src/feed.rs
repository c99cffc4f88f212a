//! HTTP ingestion of the raw feed (native builds only).

use crate::error::IngestionError;
use log::info;
use reqwest::Client;

/// Fetch the feed body as text. Non-success statuses are errors.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<String, IngestionError> {
    info!("[EQD] feed: GET {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestionError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    info!("[EQD] feed: received {} bytes", body.len());
    Ok(body)
}

