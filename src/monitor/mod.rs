//! Monitor loop subsystem.
//!
//! # Data Flow
//! ```text
//! runner.rs, once per cycle:
//!     StatusFetcher::fetch_status(bot_url)
//!     → HealthGauge set to 1 or 0
//!     → MetricsPusher::push(job, &gauge)
//!     → Sleeper::sleep(interval)   (clock.rs)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: a cycle never overlaps the next
//! - Every runtime failure is logged and the loop continues
//! - Collaborators are trait objects so tests run without network or clock

pub mod clock;
pub mod runner;

pub use clock::{Sleeper, TokioSleeper};
pub use runner::{CheckOutcome, CycleReport, Monitor};
