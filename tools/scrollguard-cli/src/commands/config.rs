//! Show the effective configuration.

use scrollguard_common::clock::HookClock;
use scrollguard_common::config::{config_file_path, AppConfig};
use scrollguard_filter_core::ConfigSnapshot;

pub fn run() -> anyhow::Result<()> {
    let path = config_file_path();
    let config = AppConfig::load();
    let snapshot = ConfigSnapshot::from_config(&config);

    println!("Settings file: {}", path.display());
    if !path.exists() {
        println!("  (not present, using defaults)");
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!();
    println!("Effective (sanitized) parameters:");
    println!("  enabled:   {}", snapshot.global.enabled);
    println!(
        "  interval:  {:.3}s",
        HookClock::ns_to_secs(snapshot.global.interval_ns)
    );
    println!("  threshold: {}", snapshot.global.threshold);
    println!("  blacklist: {} entries", snapshot.blacklist.len());
    println!("  profiles:  {} entries", snapshot.profiles.len());
    for (name, profile) in &snapshot.profiles {
        println!(
            "    {} -> interval {:.3}s, threshold {}",
            name,
            HookClock::ns_to_secs(profile.interval_ns),
            profile.threshold
        );
    }

    Ok(())
}
