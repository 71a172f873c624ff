//! Field synchronization pipeline.
//!
//! Responsibilities:
//! - Resolve the configured field names against the item type schema.
//! - Select the filter items whose write field is out of date.
//! - Patch each selected item and report progress through a [`SyncEventSink`].
//!
//! Does NOT handle:
//! - Config loading or client construction (see `main.rs`).
//! - HTTP details (see `jama_client`).
//!
//! Invariants:
//! - Failures before the first patch abort the run; failures of individual
//!   patches are reported and never abort it.

mod events;
mod executor;
mod resolver;
mod selector;

pub use events::{SyncEvent, SyncEventSink, TracingSink};
pub use executor::SyncExecutor;
pub use resolver::{ResolveError, ResolvedFields, resolve_fields};
pub use selector::select_candidates;

/// Outcome of one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Items returned by the filter.
    pub fetched: usize,
    /// Items selected for an update.
    pub candidates: usize,
    /// Items the server confirmed as updated.
    pub updated: usize,
    /// Ids of items whose patch failed or was not confirmed.
    pub failed: Vec<u64>,
}
