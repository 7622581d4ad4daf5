//! Fetch, transform and submit outages for a site

pub mod ports;
pub mod service;

pub use service::OutageSyncService;
