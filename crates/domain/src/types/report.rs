//! Summary of a completed sync run

use serde::{Deserialize, Serialize};

/// Outcome of one fetch, filter, enrich and submit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Site the outages were submitted for
    pub site_id: String,
    /// Outages returned by the API
    pub fetched: usize,
    /// Outages surviving the date and membership filter
    pub retained: usize,
    /// Retained outages that received a device name
    pub enriched: usize,
    /// Body of the submission response, passed through untouched
    pub response: serde_json::Value,
}
