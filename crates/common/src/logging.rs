//! Logging and tracing initialization.
//!
//! The hook decision path only ever emits `trace!` records, so the
//! fallback filter keeps the scrollguard crates at info and everything
//! else at warn. `RUST_LOG` takes precedence, then the configured level.
//! When `LoggingConfig.file` is set, records go to that file (append
//! mode, ANSI stripped) instead of stdout.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::config::LoggingConfig;

/// Directives used when neither `RUST_LOG` nor the configured level parses.
const FALLBACK_DIRECTIVES: &str =
    "warn,scrollguard=info,scrollguard_common=info,scrollguard_filter_core=info,\
     scrollguard_platform_windows=info";

/// Initialize the tracing subscriber with the given configuration.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVES));

    let file = config.file.as_deref().and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("scrollguard: cannot open log file {}: {e}", path.display());
            None
        }
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    match (file, config.json) {
        (Some(file), true) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        (Some(file), false) => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        (None, true) => registry.with(fmt::layer().json()).try_init(),
        (None, false) => registry.with(fmt::layer().with_target(true)).try_init(),
    }
    .ok();
}

/// Open the log file in append mode, creating parent directories.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directives_parse() {
        assert!(tracing_subscriber::EnvFilter::try_new(FALLBACK_DIRECTIVES).is_ok());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("scrollguard-open-log-{}", std::process::id()));
        let path = dir.join("deep").join("scrollguard.log");

        let file = open_log_file(&path).unwrap();
        drop(file);
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
