//! Item endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{RequestAuth, api_url, send_request};
use crate::error::{ClientError, Result};
use crate::models::{PatchOperation, StatusResponse};

/// Apply patch operations to an item.
///
/// Returns the `meta.status` reported by the server (`"OK"` on success).
pub async fn patch_item(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    item_id: u64,
    patch: &[PatchOperation],
) -> Result<String> {
    debug!(item_id, operations = patch.len(), "Patching item");

    let url = api_url(base_url, &format!("items/{}", item_id));
    let builder = auth.apply(client.patch(&url)).json(patch);
    let response = send_request(builder).await?;

    let resp: StatusResponse = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse patch response for item {}: {}", item_id, e))
    })?;

    resp.meta.status.ok_or_else(|| {
        ClientError::InvalidResponse(format!("Missing status in patch response for item {}", item_id))
    })
}
