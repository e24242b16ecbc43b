//! Per-event profile resolution.
//!
//! Given the current foreground executable name and a snapshot, produce
//! the effective (interval, threshold) pair and whether the event bypasses
//! filtering entirely. Resolution runs independently for every event, not
//! once per burst: if the user switches foreground application mid-burst,
//! the next event is evaluated under the new application's parameters
//! while the filter state is left untouched. That is surprising but
//! intentional, preserved for compatibility with the original behavior.
//!
//! This runs on the hook callback path, so matching is done with
//! case-insensitive scans over the pre-lowercased snapshot entries rather
//! than by building a lowercased key — no allocation, no failure mode.

use crate::snapshot::ConfigSnapshot;

/// The effective parameters for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedParams {
    /// Block interval in nanoseconds.
    pub interval_ns: u64,

    /// Direction-change threshold.
    pub threshold: u32,

    /// When set, the event is forwarded unconditionally and the state
    /// machine does not observe it at all.
    pub bypass: bool,
}

/// Resolve the effective parameters for the given foreground executable.
///
/// An unresolvable foreground process (`None`) is treated as "no match":
/// the global defaults apply and filtering stays active.
pub fn resolve(snapshot: &ConfigSnapshot, process: Option<&str>) -> ResolvedParams {
    if !snapshot.global.enabled {
        return ResolvedParams {
            interval_ns: snapshot.global.interval_ns,
            threshold: snapshot.global.threshold,
            bypass: true,
        };
    }

    if let Some(name) = process {
        if snapshot
            .blacklist
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(name))
        {
            return ResolvedParams {
                interval_ns: snapshot.global.interval_ns,
                threshold: snapshot.global.threshold,
                bypass: true,
            };
        }

        if let Some(profile) = snapshot
            .profiles
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, profile)| profile)
        {
            return ResolvedParams {
                interval_ns: profile.interval_ns,
                threshold: profile.threshold,
                bypass: false,
            };
        }
    }

    ResolvedParams {
        interval_ns: snapshot.global.interval_ns,
        threshold: snapshot.global.threshold,
        bypass: false,
    }
}
