//! Outage API client
//!
//! Binds the three outage endpoints onto [`HttpClient`], attaching the
//! configured `x-api-key` header to every request.

use std::time::Duration;

use async_trait::async_trait;
use outagesync_core::OutageApi;
use outagesync_domain::constants::{API_KEY_HEADER, DEFAULT_BASE_URL};
use outagesync_domain::{AppConfig, Outage, OutageSyncError, Result, RetryConfig, SiteInfo};
use reqwest::header::HeaderValue;
use reqwest::{Method, RequestBuilder};
use tracing::instrument;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("outagesync/", env!("CARGO_PKG_VERSION"));

/// Configuration for API client
#[derive(Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "https://api.krakenflex.systems/interview-tests-mock-api/v1")
    pub base_url: String,
    /// Value sent in the `x-api-key` header
    pub api_key: String,
    /// Immediate-retry policy applied to every call
    pub retry: RetryConfig,
    /// Optional per-request timeout
    pub timeout: Option<Duration>,
}

impl ApiClientConfig {
    /// Default endpoint and retry policy for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            retry: RetryConfig::default(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Build from resolved application configuration.
    ///
    /// # Errors
    /// Returns `OutageSyncError::Config` if no API key is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.api_key()?)
            .with_base_url(config.api.base_url.clone())
            .with_retry(config.retry.clone()))
    }
}

impl std::fmt::Debug for ApiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// API client for the outage endpoints
#[derive(Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
    api_key: HeaderValue,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `OutageSyncError::Config` if the base URL does not parse or the
    /// API key is not a valid header value, and propagates HTTP client
    /// construction failures.
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|err| {
            let infra: InfraError = err.into();
            OutageSyncError::from(infra)
        })?;

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|err| {
            let infra: InfraError = err.into();
            OutageSyncError::from(infra)
        })?;
        api_key.set_sensitive(true);

        let mut builder =
            HttpClient::builder().retry_config(&config.retry).user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// List every outage known to the API.
    #[instrument(skip(self))]
    pub async fn get_outages(&self) -> Result<Vec<Outage>> {
        let request = self.authorized(Method::GET, "/outages");
        self.http_client.execute(request).await
    }

    /// Fetch the description and devices of a site.
    #[instrument(skip(self))]
    pub async fn get_site_info(&self, site_id: &str) -> Result<SiteInfo> {
        let request = self.authorized(Method::GET, &format!("/site-info/{site_id}"));
        self.http_client.execute(request).await
    }

    /// Submit outages for a site and return the response body untouched.
    #[instrument(skip(self, outages), fields(count = outages.len()))]
    pub async fn post_site_outages(
        &self,
        site_id: &str,
        outages: &[Outage],
    ) -> Result<serde_json::Value> {
        let request =
            self.authorized(Method::POST, &format!("/site-outages/{site_id}")).json(outages);
        self.http_client.execute(request).await
    }

    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http_client.request(method, url).header(API_KEY_HEADER, self.api_key.clone())
    }
}

#[async_trait]
impl OutageApi for ApiClient {
    async fn get_outages(&self) -> Result<Vec<Outage>> {
        ApiClient::get_outages(self).await
    }

    async fn get_site_info(&self, site_id: &str) -> Result<SiteInfo> {
        ApiClient::get_site_info(self, site_id).await
    }

    async fn post_site_outages(
        &self,
        site_id: &str,
        outages: &[Outage],
    ) -> Result<serde_json::Value> {
        ApiClient::post_site_outages(self, site_id, outages).await
    }
}
