//! # OutageSync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The retrying HTTP request executor
//! - The outage API client
//! - Configuration loading from files and the environment
//!
//! ## Architecture
//! - Implements traits defined in `outagesync-core`
//! - Depends on `outagesync-domain` and `outagesync-core`
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
