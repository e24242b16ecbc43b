//! Immutable configuration snapshots.
//!
//! A [`ConfigSnapshot`] is built from [`AppConfig`] whenever settings
//! change and then published wholesale; the event path only ever reads a
//! complete snapshot, never a partially updated one. Validation happens
//! here: out-of-range or non-finite values are clamped or replaced with
//! the documented defaults instead of failing, and all executable names
//! are lower-cased once at construction so the per-event lookups never
//! allocate.

use std::collections::HashMap;

use scrollguard_common::config::AppConfig;
use scrollguard_common::clock::HookClock;

/// Default block interval when the configured value is unusable.
pub const DEFAULT_INTERVAL_SECS: f64 = 0.3;

/// Default direction-change threshold when the configured value is unusable.
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Valid block interval range in seconds.
pub const INTERVAL_RANGE_SECS: (f64, f64) = (0.05, 5.0);

/// Valid direction-change threshold range.
pub const THRESHOLD_RANGE: (u32, u32) = (1, 10);

/// Global blocking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalParams {
    /// Whether filtering is active at all.
    pub enabled: bool,

    /// Default block interval in nanoseconds.
    pub interval_ns: u64,

    /// Default direction-change threshold, always >= 1.
    pub threshold: u32,
}

/// A per-application interval/threshold override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOverride {
    /// Block interval in nanoseconds.
    pub interval_ns: u64,

    /// Direction-change threshold, always >= 1.
    pub threshold: u32,
}

/// Immutable bundle of global and per-application blocking parameters.
///
/// Replaced as a whole when settings change; the hook path holds a shared
/// reference and treats it as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    /// Global parameters.
    pub global: GlobalParams,

    /// Lower-cased executable names for which filtering is fully bypassed.
    pub blacklist: Vec<String>,

    /// Per-application overrides, keyed by lower-cased executable name.
    pub profiles: HashMap<String, ProfileOverride>,
}

impl ConfigSnapshot {
    /// Build a snapshot from loaded settings, sanitizing every field.
    pub fn from_config(config: &AppConfig) -> Self {
        let global = GlobalParams {
            enabled: config.enabled,
            interval_ns: sanitize_interval_ns(config.block_interval_secs),
            threshold: sanitize_threshold(config.direction_change_threshold),
        };

        let blacklist = config
            .blacklist
            .iter()
            .map(|name| name.trim().to_ascii_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        let profiles = config
            .app_profiles
            .iter()
            .map(|(name, profile)| {
                (
                    name.trim().to_ascii_lowercase(),
                    ProfileOverride {
                        interval_ns: sanitize_interval_ns(profile.interval_secs),
                        threshold: sanitize_threshold(profile.threshold),
                    },
                )
            })
            .collect();

        Self {
            global,
            blacklist,
            profiles,
        }
    }

    /// A snapshot with documented defaults and no overrides.
    pub fn with_defaults() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// A snapshot with filtering turned off entirely.
    pub fn disabled() -> Self {
        let mut snapshot = Self::with_defaults();
        snapshot.global.enabled = false;
        snapshot
    }
}

/// Clamp an interval in seconds to the valid range, substituting the
/// default for non-finite values, and convert to nanoseconds.
fn sanitize_interval_ns(secs: f64) -> u64 {
    let secs = if secs.is_finite() {
        secs.clamp(INTERVAL_RANGE_SECS.0, INTERVAL_RANGE_SECS.1)
    } else {
        DEFAULT_INTERVAL_SECS
    };
    HookClock::secs_to_ns(secs)
}

/// Clamp a threshold to the valid range. Zero means the field was missing
/// or malformed and gets the default instead.
fn sanitize_threshold(threshold: u32) -> u32 {
    if threshold == 0 {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(THRESHOLD_RANGE.0, THRESHOLD_RANGE.1)
    }
}
