//! In-memory mock for the `OutageApi` port
//!
//! Serves canned responses and records every call so tests can assert on
//! call order and submitted payloads.

use std::sync::Mutex;

use async_trait::async_trait;
use outagesync_core::OutageApi;
use outagesync_domain::{Outage, OutageSyncError, Result as DomainResult, SiteInfo};

/// A call observed by [`MockOutageApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    GetOutages,
    GetSiteInfo(String),
    PostSiteOutages(String, Vec<Outage>),
}

/// Mock API seeded with fixed outages and site info.
pub struct MockOutageApi {
    outages: Vec<Outage>,
    site_info: SiteInfo,
    response: serde_json::Value,
    fail_on: Option<&'static str>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockOutageApi {
    pub fn new(outages: Vec<Outage>, site_info: SiteInfo) -> Self {
        Self {
            outages,
            site_info,
            response: serde_json::json!({}),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Body returned from `post_site_outages`.
    pub fn with_response(mut self, response: serde_json::Value) -> Self {
        self.response = response;
        self
    }

    /// Make the named operation fail with a network error.
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall, operation: &str) -> DomainResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(operation) {
            return Err(OutageSyncError::Network(format!("{operation} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl OutageApi for MockOutageApi {
    async fn get_outages(&self) -> DomainResult<Vec<Outage>> {
        self.record(ApiCall::GetOutages, "get_outages")?;
        Ok(self.outages.clone())
    }

    async fn get_site_info(&self, site_id: &str) -> DomainResult<SiteInfo> {
        self.record(ApiCall::GetSiteInfo(site_id.to_string()), "get_site_info")?;
        Ok(self.site_info.clone())
    }

    async fn post_site_outages(
        &self,
        site_id: &str,
        outages: &[Outage],
    ) -> DomainResult<serde_json::Value> {
        self.record(
            ApiCall::PostSiteOutages(site_id.to_string(), outages.to_vec()),
            "post_site_outages",
        )?;
        Ok(self.response.clone())
    }
}
