//! Outage API bindings
//!
//! Thin endpoint wrappers over [`HttpClient`](crate::http::HttpClient) that
//! authenticate with a static `x-api-key` header.

pub mod client;

pub use client::{ApiClient, ApiClientConfig, USER_AGENT};
