// src/core/fetcher.rs

//! Content retrieval with classified failure handling.
//!
//! All network access in the pipeline goes through the [`Fetch`]
//! capability. The production implementation wraps a `reqwest` client with
//! a hard per-request deadline and performs exactly one GET round trip per
//! call: no retries, no caching, no backoff. Failures are converted into
//! the closed [`FetchError`] set at this boundary and never rethrown.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::core::config::ScanConfig;
use crate::core::models::{FetchError, FetchedPage};

/// The HTTP capability both pipeline stages retrieve content through.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Performs one GET round trip for `url`.
    async fn get(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Production fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScanConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config.request_timeout(), &config.user_agent)
    }

    pub fn with_timeout(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchedPage, FetchError> {
        debug!(url, "Sending GET request.");
        let response = self.client.get(url).send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        debug!(url, status, bytes = body.len(), "Received response body.");
        Ok(FetchedPage { status, body })
    }
}

/// Converts a `reqwest` failure into the closed error set.
///
/// Checks run in order: connection problems take precedence over timeouts
/// (a connect timeout reports both flags), then the redirect limit, then
/// request-layer failures. Whatever remains is unexpected.
pub fn classify(error: reqwest::Error) -> FetchError {
    let detail = error.to_string();
    if error.is_connect() {
        FetchError::Connection { detail }
    } else if error.is_timeout() {
        FetchError::Timeout { detail }
    } else if error.is_redirect() {
        FetchError::TooManyRedirects { detail }
    } else if error.is_status() || error.is_request() {
        FetchError::Request { detail }
    } else {
        FetchError::Unexpected { detail }
    }
}

/// Aggregator-stage retrieval: one GET, the body on success, a classified
/// failure otherwise.
///
/// A terminal status outside 2xx/3xx becomes a `Request` failure. Every
/// failure is recorded to the process-wide diagnostic log keyed by the URL
/// and error kind before being handed back; a failed retrieval is terminal
/// for the assessment.
pub async fn retrieve(fetcher: &dyn Fetch, url: &str) -> Result<String, FetchError> {
    info!(url, "Starting content retrieval.");
    let outcome = match fetcher.get(url).await {
        Ok(page) if page.is_success() => Ok(page.body),
        Ok(page) => Err(FetchError::request(format!(
            "HTTP status {} for {}",
            page.status, url
        ))),
        Err(e) => Err(e),
    };
    if let Err(e) = &outcome {
        error!(url, kind = %e.kind(), detail = e.detail(), "Content retrieval failed.");
    }
    outcome
}
