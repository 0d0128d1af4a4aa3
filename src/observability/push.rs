//! Pushgateway client.
//!
//! # Responsibilities
//! - Build the grouping URL `<base>/metrics/job/<job>`
//! - PUT the exposition payload, replacing the job's previous group
//! - Report rejected pushes with status and body
//!
//! # Design Decisions
//! - A push is attempted once; failures are returned, never retried here
//! - Only 200 and 202 count as accepted, matching the gateway's API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::observability::metrics::{HealthGauge, EXPOSITION_CONTENT_TYPE};

/// Errors from a single push.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("invalid push URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to push metrics: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status code {status} while pushing to {url}: {body}")]
    Rejected {
        status: StatusCode,
        url: String,
        body: String,
    },
}

/// Delivers the health gauge to a metrics collector.
#[async_trait]
pub trait MetricsPusher: Send + Sync {
    /// Push `gauge` as the only metric of the `job` group.
    async fn push(&self, job: &str, gauge: &HealthGauge) -> Result<(), PushError>;
}

/// [`MetricsPusher`] talking to a Prometheus Pushgateway.
#[derive(Clone)]
pub struct PushGateway {
    client: reqwest::Client,
    base_url: String,
}

impl PushGateway {
    /// Build a client for the gateway at `base_url` with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Grouping URL for `job`.
    pub fn job_url(&self, job: &str) -> Result<Url, PushError> {
        let invalid = |reason: String| PushError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        if job.is_empty() {
            return Err(invalid("job name must not be empty".to_string()));
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["metrics", "job", job]);
        Ok(url)
    }
}

#[async_trait]
impl MetricsPusher for PushGateway {
    async fn push(&self, job: &str, gauge: &HealthGauge) -> Result<(), PushError> {
        let url = self.job_url(job)?;

        let response = self
            .client
            .put(url.clone())
            .header(CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)
            .body(gauge.encode())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::ACCEPTED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PushError::Rejected {
            status,
            url: url.to_string(),
            body,
        })
    }
}
