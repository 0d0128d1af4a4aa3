//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor loop produces:
//!     → logging.rs (structured log events to stderr)
//!     → metrics.rs (HealthGauge, exposition encoding)
//!     → push.rs (PUT to the Pushgateway)
//! ```
//!
//! # Design Decisions
//! - The process exposes nothing to scrape; metrics are pushed
//! - Every push replaces the job's previous metric group

pub mod logging;
pub mod metrics;
pub mod push;

pub use self::metrics::HealthGauge;
pub use push::{MetricsPusher, PushError, PushGateway};
