//! Saved filter endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{RequestAuth, api_url, send_request};
use crate::error::{ClientError, Result};
use crate::models::{Item, ListResponse};

/// Fetch one page of a saved filter's results.
pub async fn get_filter_results_page(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    filter_id: u64,
    start_at: usize,
    max_results: usize,
) -> Result<ListResponse<Item>> {
    debug!(filter_id, start_at, max_results, "Getting filter results page");

    let url = api_url(base_url, &format!("filters/{}/results", filter_id));
    let builder = auth.apply(client.get(&url)).query(&[
        ("startAt", start_at.to_string()),
        ("maxResults", max_results.to_string()),
    ]);
    let response = send_request(builder).await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!(
            "Failed to parse results of filter {}: {}",
            filter_id, e
        ))
    })
}
