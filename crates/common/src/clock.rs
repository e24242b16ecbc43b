//! Monotonic clock for hook-event timestamps.
//!
//! Every wheel event is stamped with nanoseconds elapsed since a fixed
//! epoch recorded when the hook was installed. The interval arithmetic in
//! the filter core only ever compares elapsed values, so the epoch itself
//! is arbitrary; it just has to be monotonic and sub-millisecond.

use std::time::Instant;

/// A clock that provides monotonic timestamps relative to a fixed epoch
/// (the moment the hook was installed).
#[derive(Debug, Clone)]
pub struct HookClock {
    /// The instant the hook went live.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string), for diagnostics output.
    epoch_wall: String,
}

impl HookClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Nanoseconds elapsed since the epoch.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Wall-clock time at the epoch.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }
}
