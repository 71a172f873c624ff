//! Saved filter results.
//!
//! # Invariants
//! - Pages are requested in order until the server reports the last one.
//! - An empty page or a page without `pageInfo` ends the walk.
//! - Every further request starts past the previous one; a page that does not
//!   advance the offset is an `InvalidResponse`.

use tracing::debug;

use crate::client::JamaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::Item;

impl JamaClient {
    /// Fetch every item returned by a saved filter, following all pages.
    pub async fn get_filter_results(&mut self, filter_id: u64) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_at = 0usize;

        loop {
            let auth = self.request_auth().await?;
            let page = endpoints::get_filter_results_page(
                &self.http,
                &self.base_url,
                &auth,
                filter_id,
                start_at,
                self.page_size,
            )
            .await?;

            let received = page.data.len();
            items.extend(page.data);

            let Some(page_info) = page.meta.page_info else {
                break;
            };
            if received == 0 || page_info.is_last() {
                break;
            }
            let next = page_info.next_start();
            if next <= start_at {
                return Err(ClientError::InvalidResponse(format!(
                    "filter {} results did not advance past startAt={} (page reported startIndex={}, resultCount={})",
                    filter_id, start_at, page_info.start_index, page_info.result_count
                )));
            }
            start_at = next;
        }

        debug!(filter_id, count = items.len(), "Fetched filter results");
        Ok(items)
    }
}
