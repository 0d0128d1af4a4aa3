//! Bot status monitor library.

pub mod config;
pub mod health;
pub mod lifecycle;
pub mod monitor;
pub mod observability;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
