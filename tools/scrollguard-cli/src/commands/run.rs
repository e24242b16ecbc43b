//! Install the hook and filter until shutdown.

use std::sync::Arc;
use std::time::Duration;

use scrollguard_common::config::AppConfig;
use scrollguard_filter_core::{ConfigSnapshot, FilterEngine};

pub async fn run(diagnostics_interval: u64) -> anyhow::Result<()> {
    if !scrollguard_platform_windows::is_supported() {
        anyhow::bail!("the low-level mouse hook is only available on Windows");
    }

    let config = AppConfig::load();
    let engine = Arc::new(FilterEngine::new(ConfigSnapshot::from_config(&config)));
    tracing::info!(
        enabled = config.enabled,
        interval_secs = config.block_interval_secs,
        threshold = config.direction_change_threshold,
        blacklist = config.blacklist.len(),
        profiles = config.app_profiles.len(),
        "Starting wheel filter"
    );

    // The message loop owns its thread for the process lifetime; the hook
    // dies with the process.
    let hook_engine = Arc::clone(&engine);
    let mut hook_task =
        tokio::task::spawn_blocking(move || scrollguard_platform_windows::run_hook(hook_engine));

    let mut ticker = tokio::time::interval(Duration::from_secs(diagnostics_interval.max(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    ticker.tick().await; // first tick fires immediately, skip it

    loop {
        tokio::select! {
            result = &mut hook_task => {
                result??;
                tracing::info!("Hook message loop ended");
                return Ok(());
            }
            _ = tokio::signal::ctrl_c() => {
                let diag = engine.get_diagnostics();
                tracing::info!(
                    blocked_up = diag.blocked_up_count,
                    blocked_down = diag.blocked_down_count,
                    "Shutting down"
                );
                return Ok(());
            }
            _ = ticker.tick(), if diagnostics_interval > 0 => {
                let diag = engine.get_diagnostics();
                tracing::info!(
                    blocked_up = diag.blocked_up_count,
                    blocked_down = diag.blocked_down_count,
                    "Wheel filter diagnostics"
                );
            }
        }
    }
}
