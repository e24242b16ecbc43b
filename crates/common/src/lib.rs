//! ScrollGuard Common Utilities
//!
//! Shared infrastructure for all ScrollGuard crates:
//! - Error types and result aliases
//! - Monotonic clock for hook-event timestamps
//! - Tracing/logging initialization
//! - Settings loading and persistence

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
