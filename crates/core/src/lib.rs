//! # OutageSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Outage filtering and device-name enrichment
//! - Port interfaces (traits) for the remote outage API
//! - The sync service that chains fetch, filter, enrich and submit
//!
//! ## Architecture Principles
//! - Only depends on `outagesync-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod outages;
pub mod sync;

// Re-export specific items to avoid ambiguity
pub use outages::{attach_device_names, filter_outages};
pub use sync::ports::OutageApi;
pub use sync::OutageSyncService;
