//! Application constants
//!
//! Centralized location for the domain-level defaults used throughout the
//! application.

// Remote API
pub const DEFAULT_BASE_URL: &str = "https://api.krakenflex.systems/interview-tests-mock-api/v1";
pub const API_KEY_HEADER: &str = "x-api-key";

// Retry policy
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRYABLE_STATUSES: &[u16] = &[500];

// Run parameters
pub const DEFAULT_SITE_ID: &str = "norwich-pear-tree";
pub const DEFAULT_START_DATE: &str = "2022-01-01T00:00:00.000Z";

// Environment variables
pub const ENV_API_KEY: &str = "OUTAGESYNC_API_KEY";
pub const ENV_BASE_URL: &str = "OUTAGESYNC_BASE_URL";
pub const ENV_SITE_ID: &str = "OUTAGESYNC_SITE_ID";
pub const ENV_START_DATE: &str = "OUTAGESYNC_START_DATE";
pub const ENV_MAX_RETRIES: &str = "OUTAGESYNC_MAX_RETRIES";
pub const ENV_RETRYABLE_STATUSES: &str = "OUTAGESYNC_RETRYABLE_STATUSES";

/// Message shown when no API key could be resolved.
pub const MISSING_API_KEY_MESSAGE: &str = "Please pass your API key as an argument to this script.";
