//! ScrollGuard CLI — run the wheel filter, replay traces, inspect settings.
//!
//! Usage:
//!   scrollguard run                Install the hook and filter until Ctrl-C
//!   scrollguard replay <PATH>      Replay a JSONL wheel trace through the filter
//!   scrollguard config             Show the effective configuration
//!   scrollguard check              Check platform capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "scrollguard",
    about = "Mouse-wheel jitter filtering at the OS input hook",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the low-level mouse hook and filter until Ctrl-C
    Run {
        /// Seconds between periodic diagnostics log lines (0 disables)
        #[arg(long, default_value = "60")]
        diagnostics_interval: u64,
    },

    /// Replay a JSONL wheel trace through the filter and print decisions
    Replay {
        /// Path to the trace file
        path: PathBuf,

        /// Override the block interval (seconds)
        #[arg(long)]
        interval: Option<f64>,

        /// Override the direction-change threshold
        #[arg(long)]
        threshold: Option<u32>,

        /// Print only the summary, not per-event decisions
        #[arg(long)]
        summary_only: bool,
    },

    /// Show the effective configuration
    Config,

    /// Check platform capabilities
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from the settings file; --verbose overrides the level.
    let mut logging = scrollguard_common::config::AppConfig::load().logging;
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    scrollguard_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Run {
            diagnostics_interval,
        } => commands::run::run(diagnostics_interval).await,
        Commands::Replay {
            path,
            interval,
            threshold,
            summary_only,
        } => commands::replay::run(path, interval, threshold, summary_only),
        Commands::Config => commands::config::run(),
        Commands::Check => commands::check::run(),
    }
}
