//! The check → push → sleep loop.
//!
//! # Responsibilities
//! - Own the health gauge and keep it equal to the latest check outcome
//! - Push the gauge after every check, whatever the outcome
//! - Sleep for the configured interval and repeat until shut down

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::config::MonitorConfig;
use crate::health::{CheckError, HttpStatusFetcher, StatusFetcher};
use crate::monitor::clock::{Sleeper, TokioSleeper};
use crate::observability::{HealthGauge, MetricsPusher, PushError, PushGateway};

/// Result of one status check.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The target answered `ok: true`.
    Healthy,
    /// The target answered with `ok` false or absent.
    Unhealthy {
        error_code: Option<i64>,
        description: Option<String>,
    },
    /// The check could not be completed.
    Failed(CheckError),
}

impl CheckOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, CheckOutcome::Healthy)
    }
}

/// What happened during one cycle.
#[derive(Debug)]
pub struct CycleReport {
    pub outcome: CheckOutcome,
    /// Gauge value that was pushed.
    pub gauge_value: f64,
    pub push: Result<(), PushError>,
}

/// Periodic status monitor for a single target.
pub struct Monitor {
    config: MonitorConfig,
    gauge: HealthGauge,
    fetcher: Box<dyn StatusFetcher>,
    pusher: Box<dyn MetricsPusher>,
    sleeper: Box<dyn Sleeper>,
}

impl Monitor {
    /// Create a monitor with explicit collaborators and the Tokio sleeper.
    pub fn new<F, P>(config: MonitorConfig, fetcher: F, pusher: P) -> Self
    where
        F: StatusFetcher + 'static,
        P: MetricsPusher + 'static,
    {
        Self {
            config,
            gauge: HealthGauge::default(),
            fetcher: Box::new(fetcher),
            pusher: Box::new(pusher),
            sleeper: Box::new(TokioSleeper),
        }
    }

    /// Create a monitor talking HTTP to the target and the Pushgateway.
    pub fn from_config(config: MonitorConfig) -> Result<Self, reqwest::Error> {
        let fetcher = HttpStatusFetcher::new(config.request_timeout)?;
        let pusher = PushGateway::new(config.push_url.clone(), config.request_timeout)?;
        Ok(Self::new(config, fetcher, pusher))
    }

    /// Replace the sleeper used between cycles.
    pub fn with_sleeper<S>(mut self, sleeper: S) -> Self
    where
        S: Sleeper + 'static,
    {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn gauge(&self) -> &HealthGauge {
        &self.gauge
    }

    /// Check the target once and update the gauge.
    pub async fn check(&mut self) -> CheckOutcome {
        tracing::info!(bot_url = %self.config.bot_url, "Checking bot status...");

        let outcome = match self.fetcher.fetch_status(&self.config.bot_url).await {
            Ok(status) if status.ok => {
                tracing::info!("Bot status: OK");
                CheckOutcome::Healthy
            }
            Ok(status) => {
                tracing::warn!(
                    error_code = ?status.error_code,
                    description = %status.description.as_deref().unwrap_or_default(),
                    "Bot error"
                );
                CheckOutcome::Unhealthy {
                    error_code: status.error_code,
                    description: status.description,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error checking bot status");
                CheckOutcome::Failed(e)
            }
        };

        self.gauge.set_healthy(outcome.is_healthy());
        outcome
    }

    /// Push the current gauge value. The gauge is never modified here.
    pub async fn push(&self) -> Result<(), PushError> {
        tracing::info!(
            push_url = %self.config.push_url,
            job = %self.config.job_name,
            metric = self.gauge.name(),
            value = self.gauge.value(),
            "Pushing metrics to Pushgateway..."
        );

        let result = self.pusher.push(&self.config.job_name, &self.gauge).await;
        match &result {
            Ok(()) => tracing::info!("Pushed metrics successfully"),
            Err(e) => tracing::error!(error = %e, "Could not push to Pushgateway"),
        }
        result
    }

    /// Run one check followed by one push.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let outcome = self.check().await;
        let gauge_value = self.gauge.value();
        let push = self.push().await;

        CycleReport {
            outcome,
            gauge_value,
            push,
        }
    }

    /// Run cycles until `shutdown` fires, returning the number completed.
    ///
    /// The signal is observed before each cycle and during the sleep. A
    /// closed channel counts as a signal, so the `Shutdown` handle must
    /// outlive the loop.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> u64 {
        tracing::info!(
            bot_url = %self.config.bot_url,
            push_url = %self.config.push_url,
            interval = ?self.config.interval,
            job = %self.config.job_name,
            "Starting bot status monitoring"
        );

        let mut cycles = 0;
        loop {
            if !matches!(shutdown.try_recv(), Err(TryRecvError::Empty)) {
                tracing::info!("Monitor received shutdown signal, exiting loop");
                break;
            }

            self.run_cycle().await;
            cycles += 1;

            let interval = self.config.interval;
            tracing::info!(interval = ?interval, "Sleeping before the next check");

            tokio::select! {
                _ = self.sleeper.sleep(interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }

        cycles
    }
}
