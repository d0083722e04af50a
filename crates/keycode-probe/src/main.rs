//! keycode-probe entry point.
//!
//! Parses the command line with `clap`, loads the optional config file,
//! installs the `tracing` subscriber and prints the requested report to
//! stdout.  Log output goes to stderr so reports can be piped.
//!
//! # Log level
//!
//! `RUST_LOG` wins when set; otherwise the config file's `log_level` is used.

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use keycode_probe::{cli::Args, config, report};

fn main() -> anyhow::Result<()> {
    // Prints usage and exits on bad arguments, `--help` and `--version`.
    let args = Args::parse();

    let cfg = config::load_config(args.config.as_deref()).context("failed to load configuration")?;

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)),
        )
        .init();

    let platform = args.platform.unwrap_or(cfg.platform);
    info!(%platform, command = ?args.command, "keycode-probe starting");
    debug!(config = ?cfg, "configuration loaded");

    for line in report::render(args.command, platform) {
        println!("{line}");
    }
    Ok(())
}
