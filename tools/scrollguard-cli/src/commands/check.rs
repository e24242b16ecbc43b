//! Check platform capabilities.

use scrollguard_common::config::config_file_path;

pub fn run() -> anyhow::Result<()> {
    println!("ScrollGuard System Check");
    println!("{}", "=".repeat(50));

    if scrollguard_platform_windows::is_supported() {
        println!("[OK] Low-level mouse hook: available (Windows)");
        match scrollguard_platform_windows::foreground_process_name() {
            Some(name) => println!("[OK] Foreground process lookup: {name}"),
            None => println!("[WARN] Foreground process lookup: unresolved (defaults will apply)"),
        }
    } else {
        println!("[WARN] Low-level mouse hook: not available on this platform");
        println!("       Trace replay and configuration tooling still work.");
    }

    let path = config_file_path();
    if path.exists() {
        println!("[OK] Settings file: {}", path.display());
    } else {
        println!("[--] Settings file: {} (not present, defaults)", path.display());
    }

    Ok(())
}
