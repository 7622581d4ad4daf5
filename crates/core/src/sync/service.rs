//! Outage sync service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use outagesync_domain::{Result, SyncReport};
use tracing::{debug, info, instrument};

use super::ports::OutageApi;
use crate::outages::{attach_device_names, filter_outages};

/// Fetches outages and site info, keeps the relevant outages, names them and
/// submits them back.
///
/// Calls are issued one at a time in a fixed order. The first error aborts
/// the run.
pub struct OutageSyncService {
    api: Arc<dyn OutageApi>,
}

impl OutageSyncService {
    /// Create a new sync service
    pub fn new(api: Arc<dyn OutageApi>) -> Self {
        Self { api }
    }

    /// Run the full pipeline for one site.
    ///
    /// # Errors
    /// Propagates the first error returned by the API port.
    #[instrument(skip(self, start_date), fields(start_date = %start_date))]
    pub async fn run(&self, site_id: &str, start_date: DateTime<Utc>) -> Result<SyncReport> {
        let outages = self.api.get_outages().await?;
        debug!(count = outages.len(), "fetched outages");

        let site_info = self.api.get_site_info(site_id).await?;
        debug!(devices = site_info.devices.len(), site_name = %site_info.name, "fetched site info");

        let retained = filter_outages(&outages, &site_info, start_date);
        let enriched = attach_device_names(&retained, &site_info);
        let named = enriched.iter().filter(|outage| outage.name.is_some()).count();

        let response = self.api.post_site_outages(site_id, &enriched).await?;

        info!(
            site_id,
            fetched = outages.len(),
            retained = retained.len(),
            enriched = named,
            "submitted site outages"
        );

        Ok(SyncReport {
            site_id: site_id.to_string(),
            fetched: outages.len(),
            retained: retained.len(),
            enriched: named,
            response,
        })
    }
}
