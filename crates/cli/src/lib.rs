//! # OutageSync CLI
//!
//! Command-line layer - argument parsing, logging setup and wiring.
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Resolves configuration, builds the API client and runs the sync service

pub mod cli;
pub mod logging;

use std::sync::Arc;

use anyhow::Context;
use outagesync_core::OutageSyncService;
use outagesync_domain::{parse_timestamp, AppConfig, OutageSyncError, SyncReport};
use outagesync_infra::{ApiClient, ApiClientConfig};

pub use cli::{Cli, LogFormat};

/// Run one sync for the site and start date in `config`.
///
/// # Errors
/// Fails if the configuration is invalid, the API client cannot be built, or
/// any step of the sync run fails.
pub async fn run(config: &AppConfig) -> anyhow::Result<SyncReport> {
    config.validate().context("invalid configuration")?;

    let start_date = parse_timestamp(&config.run.start_date).context("invalid start date")?;
    let client = ApiClient::new(ApiClientConfig::from_app_config(config)?)
        .context("failed to build API client")?;

    OutageSyncService::new(Arc::new(client))
        .run(&config.run.site_id, start_date)
        .await
        .with_context(|| format!("sync failed for site '{}'", config.run.site_id))
}

/// Label of the domain error behind `err`, for structured logs.
///
/// Errors that did not originate in the sync stack are labelled `"other"`.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<OutageSyncError>())
        .map_or("other", OutageSyncError::label)
}
