//! Sync executor: fetch, select, patch.
//!
//! # Invariants
//! - A filter fetch failure is returned; nothing is patched.
//! - Each candidate gets exactly one PATCH, in selection order, never retried.
//! - The patch kind is taken from [`ResolvedFields::patch_op`] once per run.

use jama_client::{ClientError, JamaClient, PatchOperation};
use jama_config::ScriptSettings;

use crate::sync::{ResolvedFields, SyncEvent, SyncEventSink, SyncReport, select_candidates};

/// Status the server reports for an applied patch.
const PATCH_OK: &str = "OK";

/// Runs one sync pass for resolved fields.
#[derive(Debug, Clone, Copy)]
pub struct SyncExecutor<'a> {
    settings: &'a ScriptSettings,
    fields: &'a ResolvedFields,
}

impl<'a> SyncExecutor<'a> {
    pub fn new(settings: &'a ScriptSettings, fields: &'a ResolvedFields) -> Self {
        Self { settings, fields }
    }

    /// Copy the read field into the write field for every out-of-date item.
    ///
    /// # Errors
    ///
    /// Returns the client error if the filter results cannot be fetched.
    /// Patch failures are reported through `sink` and in the returned report.
    pub async fn run<S>(
        &self,
        client: &mut JamaClient,
        sink: &mut S,
    ) -> Result<SyncReport, ClientError>
    where
        S: SyncEventSink + ?Sized,
    {
        let filter_id = self.settings.filter_id;
        sink.emit(SyncEvent::FetchingItems { filter_id });
        let items = client.get_filter_results(filter_id).await?;
        sink.emit(SyncEvent::ItemsFetched { count: items.len() });

        let candidates = select_candidates(&items, self.settings.item_type_id, self.fields);
        sink.emit(SyncEvent::CandidatesSelected {
            count: candidates.len(),
        });

        let op = self.fields.patch_op();
        let total = candidates.len();
        let mut report = SyncReport {
            fetched: items.len(),
            candidates: total,
            ..SyncReport::default()
        };

        for (i, candidate) in candidates.iter().enumerate() {
            let item_id = candidate.item.id;
            sink.emit(SyncEvent::UpdatingItem {
                index: i + 1,
                total,
                item_id,
                field: self.fields.write_field.clone(),
                op,
                value: candidate.value.clone(),
            });

            let patch = [PatchOperation::set_field(
                op,
                &self.fields.write_field,
                candidate.value.clone(),
            )];

            match client.patch_item(item_id, &patch).await {
                Ok(status) if status == PATCH_OK => {
                    report.updated += 1;
                    sink.emit(SyncEvent::ItemUpdated { item_id });
                }
                Ok(status) => {
                    report.failed.push(item_id);
                    sink.emit(SyncEvent::UnexpectedStatus { item_id, status });
                }
                Err(e) => {
                    report.failed.push(item_id);
                    sink.emit(SyncEvent::ItemFailed {
                        item_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        sink.emit(SyncEvent::Completed {
            updated: report.updated,
            failed: report.failed.len(),
        });
        Ok(report)
    }
}
