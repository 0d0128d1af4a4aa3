//! Bot status monitor.
//!
//! Periodically polls a bot's status endpoint and pushes a binary health
//! gauge to a Prometheus Pushgateway.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────── MONITOR LOOP ─────────────────────────────┐
//!   │                                                                        │
//!   │   ┌──────────┐   GET    ┌──────────────┐   set    ┌──────────────┐    │
//!   │   │  health  │─────────▶│  BotStatus   │─────────▶│ HealthGauge  │    │
//!   │   │ checker  │          │  ok / error  │          │    0 | 1     │    │
//!   │   └──────────┘          └──────────────┘          └──────┬───────┘    │
//!   │        ▲                                                 │ PUT        │
//!   │        │ sleep(interval)                                 ▼            │
//!   │   ┌──────────┐                                    ┌──────────────┐    │
//!   │   │  clock   │◀───────────────────────────────────│ push gateway │    │
//!   │   └──────────┘                                    └──────────────┘    │
//!   │                                                                        │
//!   │   Cross-cutting: config (flags), observability (logs), lifecycle      │
//!   └────────────────────────────────────────────────────────────────────────┘
//! ```

use bot_status_monitor::config::{self, Cli};
use bot_status_monitor::lifecycle::{signals, Shutdown};
use bot_status_monitor::observability::logging;
use bot_status_monitor::Monitor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse_args();
    let config = match config::validate(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bot_url = %config.bot_url,
        push_url = %config.push_url,
        interval = ?config.interval,
        job = %config.job_name,
        request_timeout = ?config.request_timeout,
        "Configuration loaded"
    );

    let monitor = Monitor::from_config(config)?;

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown.clone());

    let cycles = monitor.run(receiver).await;

    tracing::info!(cycles, "Shutdown complete");
    Ok(())
}
