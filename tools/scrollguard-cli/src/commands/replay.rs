//! Replay a JSONL wheel trace through the filter.
//!
//! Useful for tuning interval/threshold choices offline: feed a captured
//! trace through a fresh engine and see exactly which events would have
//! been suppressed.

use std::path::PathBuf;

use scrollguard_common::clock::HookClock;
use scrollguard_common::config::AppConfig;
use scrollguard_filter_core::event::parse_trace;
use scrollguard_filter_core::{ConfigSnapshot, Decision, FilterEngine};

pub fn run(
    path: PathBuf,
    interval: Option<f64>,
    threshold: Option<u32>,
    summary_only: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Trace file not found: {}", path.display()))?;
    let events =
        parse_trace(&content).map_err(|e| anyhow::anyhow!("Failed to parse trace: {e}"))?;

    let mut config = AppConfig::load();
    if let Some(interval) = interval {
        config.block_interval_secs = interval;
    }
    if let Some(threshold) = threshold {
        config.direction_change_threshold = threshold;
    }

    let snapshot = ConfigSnapshot::from_config(&config);
    println!(
        "Replaying {} events (interval={:.3}s, threshold={})",
        events.len(),
        HookClock::ns_to_secs(snapshot.global.interval_ns),
        snapshot.global.threshold
    );

    let engine = FilterEngine::new(snapshot);
    let mut forwarded = 0u64;

    for event in &events {
        let decision = engine.classify(event);
        if decision == Decision::Forward {
            forwarded += 1;
        }
        if !summary_only {
            println!(
                "  t={:>9.4}s {:<5} {:<8} {}",
                event.timestamp_secs(),
                format!("{:?}", event.direction).to_lowercase(),
                match decision {
                    Decision::Forward => "forward",
                    Decision::Suppress => "SUPPRESS",
                },
                event.process.as_deref().unwrap_or("-")
            );
        }
    }

    let diag = engine.get_diagnostics();
    println!();
    println!("Forwarded:  {forwarded}");
    println!(
        "Suppressed: {} (up: {}, down: {})",
        diag.total(),
        diag.blocked_up_count,
        diag.blocked_down_count
    );

    Ok(())
}
