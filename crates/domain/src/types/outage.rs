//! Outage records as served by the remote API.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{OutageSyncError, Result};

/// A period during which a device was unavailable.
///
/// `begin` and `end` are kept as the exact strings the API returned so that a
/// record can be submitted back without reformatting. Use [`Outage::begin_at`]
/// when a parsed timestamp is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outage {
    /// Identifier of the device the outage belongs to
    pub id: String,
    /// ISO 8601 start timestamp
    pub begin: String,
    /// ISO 8601 end timestamp
    pub end: String,
    /// Display name of the device, attached during enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Outage {
    pub fn new(id: impl Into<String>, begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self { id: id.into(), begin: begin.into(), end: end.into(), name: None }
    }

    /// Return a copy of this outage carrying the given device name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse the `begin` timestamp.
    ///
    /// # Errors
    /// Returns `OutageSyncError::InvalidInput` if `begin` is not a recognised
    /// ISO 8601 timestamp.
    pub fn begin_at(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.begin)
    }
}

/// Offset timestamp without seconds, e.g. `2022-06-01T00:00Z`.
const MINUTE_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

/// Parse an ISO 8601 timestamp into UTC.
///
/// Accepts full RFC 3339, minute precision with an offset, and a bare
/// calendar date, which is taken as midnight UTC.
///
/// # Errors
/// Returns `OutageSyncError::InvalidInput` when the value matches none of
/// these forms.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(rfc_err) => DateTime::parse_from_str(value, MINUTE_PRECISION_FORMAT)
            .map(|ts| ts.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            })
            .map_err(|_| {
                OutageSyncError::InvalidInput(format!("invalid timestamp '{value}': {rfc_err}"))
            }),
    }
}
