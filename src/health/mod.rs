//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! checker.rs:
//!     GET target URL
//!     → read body
//!     → decode status.rs (BotStatus)
//!
//! Outcome:
//!     ok == true              → gauge 1
//!     ok == false             → gauge 0
//!     transport/parse failure → gauge 0
//! ```
//!
//! # Design Decisions
//! - One attempt per cycle, no retries
//! - HTTP status code is ignored; the body decides
//! - Missing `ok` field decodes as false

pub mod checker;
pub mod status;

pub use checker::{CheckError, HttpStatusFetcher, StatusFetcher};
pub use status::BotStatus;
