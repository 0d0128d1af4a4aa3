//! Status checks against the monitored endpoint.
//!
//! # Responsibilities
//! - Issue one GET per cycle, no retry
//! - Read the full body and decode it as [`BotStatus`]
//! - Classify failures as transport, body or parse errors

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::health::status::BotStatus;

/// Errors from a single status check. All of them mean "unhealthy".
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches the current status of a target.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch_status(&self, url: &str) -> Result<BotStatus, CheckError>;
}

/// [`StatusFetcher`] backed by a `reqwest` client.
#[derive(Clone)]
pub struct HttpStatusFetcher {
    client: reqwest::Client,
}

impl HttpStatusFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bot-status-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch_status(&self, url: &str) -> Result<BotStatus, CheckError> {
        let response = self.client.get(url).send().await.map_err(CheckError::Request)?;

        // The status code is not interpreted; error payloads come with 4xx.
        tracing::debug!(url = %url, status = %response.status(), "Status endpoint responded");

        let body = response.bytes().await.map_err(CheckError::Body)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
