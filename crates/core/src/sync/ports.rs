//! Port interface for the remote outage API
//!
//! The sync service talks to the API only through this trait; the HTTP
//! implementation lives in the infrastructure crate.

use async_trait::async_trait;
use outagesync_domain::{Outage, Result, SiteInfo};

/// Remote outage API
#[async_trait]
pub trait OutageApi: Send + Sync {
    /// List every known outage
    async fn get_outages(&self) -> Result<Vec<Outage>>;

    /// Fetch the description and device list of a site
    async fn get_site_info(&self, site_id: &str) -> Result<SiteInfo>;

    /// Submit the outages for a site, returning the API's response body
    async fn post_site_outages(
        &self,
        site_id: &str,
        outages: &[Outage],
    ) -> Result<serde_json::Value>;
}
