//! Item type lookups.

use crate::client::JamaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ItemType;

impl JamaClient {
    /// Fetch the item type definition, including its field list.
    pub async fn get_item_type(&mut self, item_type_id: u64) -> Result<ItemType> {
        let auth = self.request_auth().await?;
        endpoints::get_item_type(&self.http, &self.base_url, &auth, item_type_id).await
    }
}
