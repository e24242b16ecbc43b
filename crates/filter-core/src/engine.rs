//! The filter engine: snapshot publication, state ownership, and the
//! per-event decision entry point.
//!
//! Two logical threads touch this type. The OS callback thread calls
//! [`FilterEngine::classify`] synchronously for every wheel notification.
//! The settings/UI thread calls [`FilterEngine::reload`] when the user
//! edits settings and [`FilterEngine::get_diagnostics`] for display.
//!
//! The snapshot is shared-read, single-writer: a new immutable
//! [`ConfigSnapshot`] is published by atomic replacement and the callback
//! thread always reads a complete one without taking a lock. The single
//! process-wide [`FilterState`] sits behind a mutex, but the callback path
//! only ever uses `try_lock`: the platform delivers low-level hook events
//! serially, so contention means a reload (or a stress-level re-entrant
//! callback) is in flight, and the correct fallback is to forward the
//! event rather than stall the input pipeline. A lost decision is
//! tolerable; corrupted state is not.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::diagnostics::{Diagnostics, DiagnosticsSnapshot};
use crate::event::WheelEvent;
use crate::machine::{classify, Decision, FilterState};
use crate::resolver::resolve;
use crate::snapshot::ConfigSnapshot;

/// Process-wide filter: one snapshot, one state, one set of counters.
pub struct FilterEngine {
    snapshot: ArcSwap<ConfigSnapshot>,
    state: Mutex<FilterState>,
    diagnostics: Diagnostics,
}

impl FilterEngine {
    /// Create an engine with the given starting configuration and an
    /// empty filter state.
    pub fn new(snapshot: ConfigSnapshot) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(snapshot),
            state: Mutex::new(FilterState::new()),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Decide one wheel event. Never blocks and never fails: every
    /// degraded path (bypass, contended state) forwards the event.
    pub fn classify(&self, event: &WheelEvent) -> Decision {
        let snapshot = self.snapshot.load();
        let params = resolve(&snapshot, event.process.as_deref());

        if params.bypass {
            // The state machine does not observe bypassed events at all.
            return Decision::Forward;
        }

        let Some(mut state) = self.state.try_lock() else {
            return Decision::Forward;
        };

        let decision = classify(&mut state, event, &params);
        drop(state);

        if decision == Decision::Suppress {
            self.diagnostics.record_suppressed(event.direction);
            tracing::trace!(
                direction = ?event.direction,
                t_ns = event.timestamp_ns,
                process = event.process.as_deref().unwrap_or("<unknown>"),
                "Suppressed wheel jitter"
            );
        }

        decision
    }

    /// Atomically replace the configuration and reset the filter state to
    /// empty. Called by the settings/UI thread after the user edits
    /// settings.
    pub fn reload(&self, snapshot: ConfigSnapshot) {
        self.snapshot.store(Arc::new(snapshot));
        // Single exchange, safe relative to an in-flight classify.
        *self.state.lock() = FilterState::new();
        tracing::info!("Filter configuration reloaded, state reset");
    }

    /// Current suppressed-event counters.
    pub fn get_diagnostics(&self) -> DiagnosticsSnapshot {
        self.diagnostics.snapshot()
    }

    /// The currently published configuration.
    pub fn current_snapshot(&self) -> Arc<ConfigSnapshot> {
        self.snapshot.load_full()
    }

    /// Copy of the running state, for tests and diagnostics display.
    pub fn state(&self) -> FilterState {
        *self.state.lock()
    }
}
