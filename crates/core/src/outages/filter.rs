//! Date and device-membership filtering

use chrono::{DateTime, Utc};
use outagesync_domain::{Outage, SiteInfo};
use tracing::warn;

/// Select the outages that began at or after `start_date` and belong to a
/// device listed in `site_info`.
///
/// The input is left untouched and the surviving records keep their relative
/// order. An outage whose `begin` cannot be parsed never satisfies the date
/// bound and is dropped.
pub fn filter_outages(
    outages: &[Outage],
    site_info: &SiteInfo,
    start_date: DateTime<Utc>,
) -> Vec<Outage> {
    outages
        .iter()
        .filter(|outage| {
            began_on_or_after(outage, start_date) && site_info.has_device(&outage.id)
        })
        .cloned()
        .collect()
}

fn began_on_or_after(outage: &Outage, start_date: DateTime<Utc>) -> bool {
    match outage.begin_at() {
        Ok(begin) => begin >= start_date,
        Err(err) => {
            warn!(outage_id = %outage.id, error = %err, "dropping outage with unparseable begin");
            false
        }
    }
}
