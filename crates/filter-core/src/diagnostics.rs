//! Suppressed-event counters.
//!
//! Observability only: the counters are never consulted for control
//! decisions. They are plain relaxed atomics so the hook path can bump
//! them without coordination.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::event::Direction;

/// Per-direction counters of suppressed events.
#[derive(Debug, Default)]
pub struct Diagnostics {
    blocked_up: AtomicU64,
    blocked_down: AtomicU64,
}

/// A point-in-time copy of the counters, for the UI/diagnostics surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsSnapshot {
    pub blocked_up_count: u64,
    pub blocked_down_count: u64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one suppressed event in the given direction.
    pub fn record_suppressed(&self, direction: Direction) {
        match direction {
            Direction::Up => self.blocked_up.fetch_add(1, Ordering::Relaxed),
            Direction::Down => self.blocked_down.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Read both counters.
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            blocked_up_count: self.blocked_up.load(Ordering::Relaxed),
            blocked_down_count: self.blocked_down.load(Ordering::Relaxed),
        }
    }
}

impl DiagnosticsSnapshot {
    /// Total suppressed events in both directions.
    pub fn total(&self) -> u64 {
        self.blocked_up_count + self.blocked_down_count
    }
}
