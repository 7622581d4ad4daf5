//! Configuration loader
//!
//! Resolves application configuration in layers.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. Merge a config file, either the explicit path or the first probed file
//! 3. Apply environment variable overrides
//!
//! Command-line flags are applied on top by the binary.
//!
//! ## Environment Variables
//! - `OUTAGESYNC_API_KEY`: API key sent as `x-api-key`
//! - `OUTAGESYNC_BASE_URL`: Base URL of the outage API
//! - `OUTAGESYNC_SITE_ID`: Site to sync
//! - `OUTAGESYNC_START_DATE`: Inclusive ISO 8601 lower bound on outage begin
//! - `OUTAGESYNC_MAX_RETRIES`: Number of immediate resends
//! - `OUTAGESYNC_RETRYABLE_STATUSES`: Comma separated status codes
//!
//! ## File Locations
//! When no path is given the loader probes, in order:
//! 1. `./outagesync.toml`
//! 2. `./outagesync.json`

use std::path::{Path, PathBuf};

use outagesync_domain::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_RETRYABLE_STATUSES, ENV_SITE_ID,
    ENV_START_DATE,
};
use outagesync_domain::{AppConfig, OutageSyncError, Result};

use crate::errors::InfraError;

/// Load configuration from defaults, an optional file and the environment.
///
/// # Errors
/// Returns `OutageSyncError::Config` if an explicit file is missing, a file
/// cannot be parsed, or an environment variable holds an invalid value.
pub fn load(path: Option<PathBuf>) -> Result<AppConfig> {
    let mut config = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a TOML or JSON file.
///
/// # Errors
/// Returns `OutageSyncError::Config` if the file does not exist, cannot be
/// read, or has an unsupported or invalid format.
pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(OutageSyncError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path).map_err(|err| {
        let infra: InfraError = err.into();
        OutageSyncError::from(infra)
    })?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| {
            let infra: InfraError = e.into();
            OutageSyncError::from(infra)
        }),
        "json" => serde_json::from_str(contents)
            .map_err(|e| OutageSyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(OutageSyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory for a config file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    [cwd.join("outagesync.toml"), cwd.join("outagesync.json")]
        .into_iter()
        .find(|candidate| candidate.is_file())
}

/// Apply `OUTAGESYNC_*` environment variables on top of `config`.
///
/// # Errors
/// Returns `OutageSyncError::Config` if a numeric variable does not parse.
pub fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup.
///
/// Empty values are ignored so that an exported but blank variable does not
/// clobber a file setting.
///
/// # Errors
/// Returns `OutageSyncError::Config` if a numeric value does not parse.
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(key) = get(ENV_API_KEY) {
        config.api.api_key = Some(key);
    }
    if let Some(base_url) = get(ENV_BASE_URL) {
        config.api.base_url = base_url;
    }
    if let Some(site_id) = get(ENV_SITE_ID) {
        config.run.site_id = site_id;
    }
    if let Some(start_date) = get(ENV_START_DATE) {
        config.run.start_date = start_date;
    }
    if let Some(raw) = get(ENV_MAX_RETRIES) {
        config.retry.max_retries = raw.trim().parse::<u32>().map_err(|e| {
            OutageSyncError::Config(format!("Invalid {ENV_MAX_RETRIES} '{raw}': {e}"))
        })?;
    }
    if let Some(raw) = get(ENV_RETRYABLE_STATUSES) {
        config.retry.retryable_statuses = parse_status_list(&raw)?;
    }

    Ok(())
}

fn parse_status_list(raw: &str) -> Result<Vec<u16>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u16>().map_err(|e| {
                OutageSyncError::Config(format!("Invalid retryable status '{part}': {e}"))
            })
        })
        .collect()
}
