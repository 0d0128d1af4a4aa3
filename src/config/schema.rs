//! Configuration schema definitions.
//!
//! `MonitorConfig` is built once at startup from the command line and never
//! mutated afterwards.

use std::time::Duration;

/// Pushgateway address used when `-push-url` is not given.
pub const DEFAULT_PUSH_URL: &str = "http://127.0.0.1:9091/";

/// Delay between poll cycles when `-interval` is not given.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// [`DEFAULT_INTERVAL`] as spelled on the command line.
pub const DEFAULT_INTERVAL_ARG: &str = "1m";

/// Upper bound on a single check or push request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Job label the gauge is pushed under.
pub const JOB_NAME: &str = "oula";

/// Name of the pushed gauge.
pub const GAUGE_NAME: &str = "tg_bot_status";

/// Help text of the pushed gauge.
pub const GAUGE_HELP: &str = "Status of the Telegram bot (1 for OK, 0 for error)";

/// Validated monitor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Status endpoint polled every cycle.
    pub bot_url: String,

    /// Pushgateway base URL (always carries a scheme).
    pub push_url: String,

    /// Delay between the end of one cycle and the start of the next.
    pub interval: Duration,

    /// Job label for the pushed metric group.
    pub job_name: String,

    /// Timeout applied to every outbound HTTP request.
    pub request_timeout: Duration,
}

impl MonitorConfig {
    /// Configuration for `bot_url` with every other field at its default.
    pub fn new(bot_url: impl Into<String>) -> Self {
        Self {
            bot_url: bot_url.into(),
            push_url: DEFAULT_PUSH_URL.to_string(),
            interval: DEFAULT_INTERVAL,
            job_name: JOB_NAME.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
