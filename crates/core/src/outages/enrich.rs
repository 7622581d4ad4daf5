//! Device display-name enrichment

use outagesync_domain::{Outage, SiteInfo};

/// Attach the display name of the matching site device to each outage.
///
/// Returns new records; the first device whose id matches wins and replaces
/// any name already present. Outages without a matching device are returned
/// unchanged, which only happens when the input skipped
/// [`filter_outages`](super::filter_outages).
pub fn attach_device_names(outages: &[Outage], site_info: &SiteInfo) -> Vec<Outage> {
    outages
        .iter()
        .map(|outage| match site_info.device(&outage.id) {
            Some(device) => outage.clone().with_name(device.name.clone()),
            None => outage.clone(),
        })
        .collect()
}
