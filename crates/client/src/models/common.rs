//! Common envelope types shared across Jama API models.
//!
//! Every Jama v1 response wraps its payload as `{"meta": {...}, "data": ...}`.
//! Error responses carry only `meta` with a `status` and `message`.

use serde::Deserialize;

/// Response metadata.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct JamaMeta {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
}

/// Paging details for list responses.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(rename = "startIndex")]
    pub start_index: usize,
    #[serde(rename = "resultCount")]
    pub result_count: usize,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

impl PageInfo {
    /// Index of the first result after this page.
    pub fn next_start(&self) -> usize {
        self.start_index + self.result_count
    }

    /// Whether this page reaches the end of the result set.
    pub fn is_last(&self) -> bool {
        self.next_start() >= self.total_results
    }
}

/// Single-resource response.
#[derive(Debug, Deserialize, Clone)]
pub struct DataResponse<T> {
    #[serde(default)]
    pub meta: JamaMeta,
    pub data: T,
}

/// One page of a list response.
#[derive(Debug, Deserialize, Clone)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub meta: JamaMeta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Response that carries only metadata (e.g. PATCH acknowledgements and errors).
#[derive(Debug, Deserialize, Clone)]
pub struct StatusResponse {
    pub meta: JamaMeta,
}
