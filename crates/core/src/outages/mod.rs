//! Pure transformations over outage records

pub mod enrich;
pub mod filter;

pub use enrich::attach_device_names;
pub use filter::filter_outages;
