//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → monitor loop exits at its next sleep or cycle boundary
//! ```
//!
//! # Design Decisions
//! - A running check or push is allowed to finish
//! - Without a signal the monitor runs forever

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
