//! Progress events emitted by the sync executor.
//!
//! The executor never logs directly; it hands [`SyncEvent`]s to a
//! [`SyncEventSink`]. The binary installs [`TracingSink`], tests install a
//! recorder.

use jama_client::PatchOp;
use serde_json::Value;
use tracing::{error, info, warn};

/// One step of a sync run.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    FetchingItems { filter_id: u64 },
    ItemsFetched { count: usize },
    CandidatesSelected { count: usize },
    UpdatingItem {
        /// 1-based position among the candidates.
        index: usize,
        total: usize,
        item_id: u64,
        field: String,
        op: PatchOp,
        value: Value,
    },
    ItemUpdated { item_id: u64 },
    /// The server answered, but not with `OK`.
    UnexpectedStatus { item_id: u64, status: String },
    ItemFailed { item_id: u64, error: String },
    Completed { updated: usize, failed: usize },
}

/// Receiver for sync progress.
pub trait SyncEventSink {
    fn emit(&mut self, event: SyncEvent);
}

/// Writes every event to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SyncEventSink for TracingSink {
    fn emit(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::FetchingItems { filter_id } => {
                info!("Retrieving filter items from filter ID:{filter_id} ...");
            }
            SyncEvent::ItemsFetched { count } => {
                info!("Successfully retrieved {count} filter items");
            }
            SyncEvent::CandidatesSelected { count } => {
                info!("Identified {count} items to be updated");
            }
            SyncEvent::UpdatingItem {
                index,
                total,
                item_id,
                field,
                op,
                value,
            } => {
                info!(
                    %op,
                    "Updating item {index}/{total} ID:{item_id} field:{field} update-value:{} ...",
                    display_value(&value)
                );
            }
            SyncEvent::ItemUpdated { item_id } => {
                info!(item_id, "Successfully updated item");
            }
            SyncEvent::UnexpectedStatus { item_id, status } => {
                warn!(item_id, %status, "Item update was not confirmed");
            }
            SyncEvent::ItemFailed { item_id, error } => {
                error!(item_id, "FAILED to update item: {error}");
            }
            SyncEvent::Completed { updated, failed } => {
                info!(updated, failed, "done");
            }
        }
    }
}

/// Strings are shown without quotes, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
