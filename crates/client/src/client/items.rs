//! Item updates.

use crate::client::JamaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::PatchOperation;

impl JamaClient {
    /// Apply a JSON-Patch document to one item.
    ///
    /// Returns the status string reported by the server (`"OK"` on success).
    pub async fn patch_item(&mut self, item_id: u64, patch: &[PatchOperation]) -> Result<String> {
        let auth = self.request_auth().await?;
        endpoints::patch_item(&self.http, &self.base_url, &auth, item_id, patch).await
    }
}
