//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! process arguments
//!     → cli.rs (single-dash normalisation, clap parsing)
//!     → duration.rs (interval value parser)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built
//! - Every flag except the bot URL has a default
//! - No config files, no environment variables

pub mod cli;
pub mod duration;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::MonitorConfig;
pub use validation::{validate, ConfigError};
