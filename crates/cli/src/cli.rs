//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use outagesync_domain::AppConfig;

/// Fetch outages, keep those for a site's devices since a start date, attach
/// device names and submit them back to the outage API.
#[derive(Debug, Parser)]
#[command(name = "outagesync", version)]
pub struct Cli {
    /// API key sent in the x-api-key header
    pub api_key: Option<String>,

    /// Site whose outages are submitted
    #[arg(long)]
    pub site_id: Option<String>,

    /// Inclusive ISO 8601 lower bound on outage begin
    #[arg(long)]
    pub start_date: Option<String>,

    /// Base URL of the outage API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Immediate resends on a retryable status
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Config file (TOML or JSON)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Apply flags on top of the file and environment configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(key) = &self.api_key {
            config.api.api_key = Some(key.clone());
        }
        if let Some(site_id) = &self.site_id {
            config.run.site_id = site_id.clone();
        }
        if let Some(start_date) = &self.start_date {
            config.run.start_date = start_date.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(max_retries) = self.max_retries {
            config.retry.max_retries = max_retries;
        }
    }
}
