//! ScrollGuard Filter Core
//!
//! Decides, per incoming wheel event and in real time, whether the event is
//! forwarded to the rest of the input chain or suppressed as jitter. The
//! crate is deliberately platform-free: the hook adapter hands it one
//! classified event at a time and must get an answer back within
//! microseconds, so everything on the decision path is synchronous,
//! lock-free or fail-open, and allocation-free.
//!
//! Pieces, leaves first:
//! - [`event`] — directions, wheel events, and the JSONL trace format used
//!   by the replay tooling and tests.
//! - [`snapshot`] — the immutable configuration bundle
//!   ([`ConfigSnapshot`]) rebuilt whenever settings change.
//! - [`resolver`] — per-event lookup of the effective (interval, threshold)
//!   pair for the current foreground application.
//! - [`machine`] — the debounce state machine itself.
//! - [`diagnostics`] — suppressed-event counters.
//! - [`engine`] — [`FilterEngine`], which wires the above together behind
//!   an atomically published snapshot and a single process-wide state.

pub mod diagnostics;
pub mod engine;
pub mod event;
pub mod machine;
pub mod resolver;
pub mod snapshot;

pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use engine::FilterEngine;
pub use event::{Direction, TimestampNs, WheelEvent};
pub use machine::{classify, Decision, FilterState};
pub use resolver::{resolve, ResolvedParams};
pub use snapshot::{ConfigSnapshot, GlobalParams, ProfileOverride};
