//! # addtorrent
//!
//! ## Usage
//!
//! ```sh,ignore
//! addtorrent [--profile NAME] [--notify] [--config PATH] TORRENT
//! ```
//!
//! Prints `Added: <name>`, `Connection: <message>` or `Error: <detail>`, or shows it as a
//! desktop notification with `--notify`.

#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::io;

use addtorrent_transmission as _;
use addtorrent_types as _;
use clap::Parser;
use dirs as _;
use ini as _;
use notify_rust as _;
use regex as _;
use thiserror as _;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use addtorrent::{
    cli::Cli,
    config,
    report::{DesktopNotifier, Reporter},
    submit_to_daemon,
};

/// Initializes the tracing subscriber. Logs go to stderr so stdout only carries the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let connection = config::resolve(&path, &cli.profile);
    debug!(
        "Using profile {} from {}: {:?}",
        cli.profile,
        path.display(),
        connection
    );

    let report = submit_to_daemon(&connection, &cli.torrent).await;

    let mut reporter = Reporter::new(io::stdout().lock(), DesktopNotifier::default());
    reporter.report(&report, cli.notify)?;

    Ok(())
}
