//! Item type endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{RequestAuth, api_url, send_request};
use crate::error::{ClientError, Result};
use crate::models::{DataResponse, ItemType};

/// Get an item type definition by id.
pub async fn get_item_type(
    client: &Client,
    base_url: &str,
    auth: &RequestAuth,
    item_type_id: u64,
) -> Result<ItemType> {
    debug!("Getting item type {}", item_type_id);

    let url = api_url(base_url, &format!("itemtypes/{}", item_type_id));
    let builder = auth.apply(client.get(&url));
    let response = send_request(builder).await?;

    let resp: DataResponse<ItemType> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse item type {}: {}", item_type_id, e))
    })?;
    Ok(resp.data)
}
