//! ScrollGuard Windows hook adapter.
//!
//! Registers a `WH_MOUSE_LL` low-level mouse hook and feeds every
//! `WM_MOUSEWHEEL` notification through the filter engine. The hook
//! procedure runs synchronously on the OS input-pipeline thread, so the
//! decision path does no I/O and no blocking: it stamps the event with the
//! monotonic hook clock, resolves the foreground executable name, asks the
//! engine, and either consumes the event (`Suppress` → non-zero return) or
//! hands it to the next hook in the chain (`Forward` → `CallNextHookEx`).
//!
//! Notifications other than the wheel message, and codes other than
//! `HC_ACTION`, are passed through untouched. A zero wheel delta carries
//! no direction and is passed through without consulting the engine.
//!
//! On non-Windows targets the crate compiles to an unsupported-platform
//! surface so portable tooling (the CLI's `replay`, `config`, and `check`
//! commands) can link against it everywhere.

use std::sync::Arc;

use scrollguard_common::error::ScrollguardResult;
use scrollguard_filter_core::FilterEngine;

#[cfg(target_os = "windows")]
mod foreground;
#[cfg(target_os = "windows")]
mod hook;

/// Whether this build can install the low-level mouse hook.
pub fn is_supported() -> bool {
    cfg!(target_os = "windows")
}

/// Install the mouse hook and run the message-retrieval loop that keeps it
/// alive. Blocks the calling thread until the loop receives `WM_QUIT`; the
/// hook is deregistered on the way out.
#[cfg(target_os = "windows")]
pub fn run_hook(engine: Arc<FilterEngine>) -> ScrollguardResult<()> {
    hook::run(engine)
}

/// Install the mouse hook and run the message-retrieval loop.
///
/// Not available on this platform; returns an unsupported-platform error.
#[cfg(not(target_os = "windows"))]
pub fn run_hook(_engine: Arc<FilterEngine>) -> ScrollguardResult<()> {
    Err(scrollguard_common::error::ScrollguardError::unsupported(
        "the low-level mouse hook requires Windows",
    ))
}

/// Resolve the current foreground executable name, when possible.
///
/// "No foreground window", "process gone", and "access denied" all yield
/// `None`; this never fails.
pub fn foreground_process_name() -> Option<String> {
    #[cfg(target_os = "windows")]
    {
        foreground::process_name()
    }
    #[cfg(not(target_os = "windows"))]
    {
        None
    }
}
