use std::time::Duration;

use outagesync_domain::{OutageSyncError, Result, RetryConfig};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::errors::InfraError;

/// HTTP client that immediately resends requests answered with a retryable
/// status.
///
/// Retries carry no delay or backoff. Once a non-retryable status arrives or
/// the retry budget is spent, the response is handed back regardless of its
/// status code.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryConfig,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder with retry semantics and return
    /// the raw final response.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut retries = 0u32;

        loop {
            let cloned_builder = builder.try_clone().ok_or_else(|| {
                OutageSyncError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            let request = cloned_builder.build().map_err(|err| {
                let infra: InfraError = err.into();
                OutageSyncError::from(infra)
            })?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt = retries + 1, %method, %url, "sending HTTP request");

            let response = self.client.execute(request).await.map_err(|err| {
                debug!(attempt = retries + 1, %method, %url, error = %err, "HTTP request failed");
                let infra: InfraError = err.into();
                OutageSyncError::from(infra)
            })?;

            let status = response.status();
            if self.retry.is_retryable(status.as_u16()) && retries < self.retry.max_retries {
                retries += 1;
                warn!(
                    %method,
                    %url,
                    %status,
                    retry = retries,
                    "retryable status, resending request"
                );
                continue;
            }

            info!(%method, %url, %status, retries, "HTTP request completed");
            return Ok(response);
        }
    }

    /// Execute the request with retry semantics and parse the final body as
    /// JSON.
    ///
    /// The status of the final response is not inspected: an exhausted
    /// retryable status or a client error still yields its parsed body.
    pub async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;

        let body = response.bytes().await.map_err(|err| {
            let infra: InfraError = err.into();
            OutageSyncError::from(infra)
        })?;

        serde_json::from_slice(&body).map_err(|err| {
            let infra: InfraError = err.into();
            OutageSyncError::from(infra)
        })
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    retry: RetryConfig,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Per-request timeout. Unset by default, leaving the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Configure the number of resends after the initial attempt.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.retry.max_retries = retries;
        self
    }

    pub fn retryable_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.retry.retryable_statuses = statuses.into();
        self
    }

    /// Replace the whole retry policy.
    pub fn retry_config(mut self, retry: &RetryConfig) -> Self {
        self.retry = retry.clone();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            OutageSyncError::from(infra)
        })?;

        Ok(HttpClient { client, retry: self.retry })
    }
}
