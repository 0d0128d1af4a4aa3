//! The health gauge and its exposition encoding.
//!
//! # Metrics
//! - `tg_bot_status` (gauge): 1=target reported ok, 0=anything else
//!
//! # Design Decisions
//! - The gauge is a plain value owned by the monitor, not a global
//! - Encoding goes through a throwaway local recorder per push, so nothing
//!   is ever installed process-wide

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::config::schema::{GAUGE_HELP, GAUGE_NAME};

/// Content type of the Prometheus text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Binary health signal for the monitored target.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthGauge {
    name: &'static str,
    help: &'static str,
    value: f64,
}

impl HealthGauge {
    /// Create a gauge with an explicit name and help text, starting at 0.
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self { name, help, value: 0.0 }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    /// Set the gauge from a health verdict.
    pub fn set_healthy(&mut self, healthy: bool) {
        self.set(if healthy { 1.0 } else { 0.0 });
    }

    /// Render the gauge as a single-metric exposition payload.
    pub fn encode(&self) -> String {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            metrics::describe_gauge!(self.name, self.help);
            metrics::gauge!(self.name).set(self.value);
        });

        handle.render()
    }
}

impl Default for HealthGauge {
    fn default() -> Self {
        Self::new(GAUGE_NAME, GAUGE_HELP)
    }
}
