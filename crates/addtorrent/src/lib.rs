//! # addtorrent
//!
//! Adds a torrent or magnet link to a Transmission daemon and reports the result, either
//! on standard output or as a desktop notification.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::io;
//!
//! use addtorrent::{config, report::{DesktopNotifier, Reporter}, submit_to_daemon};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let connection = config::resolve(&config::default_config_path(), "default");
//!     let report = submit_to_daemon(&connection, "magnet:?xt=urn:btih:...").await;
//!     Reporter::new(io::stdout(), DesktopNotifier::default()).report(&report, false)?;
//!     Ok(())
//! }
//! ```

use addtorrent_transmission::TransmissionClient;
use addtorrent_types::{ConnectionConfig, TorrentSubmitter};
use dotenvy as _;
use tokio as _;
use tracing::{debug, info};
use tracing_subscriber as _;

pub mod cli;
pub mod config;
pub mod outcome;
pub mod report;

pub use outcome::Report;

/// Submits `torrent` through `submitter` and classifies the result.
pub async fn submit<S: TorrentSubmitter>(submitter: &S, torrent: &str) -> Report {
    let outcome = submitter.add(torrent).await;
    match &outcome {
        Ok(added) => info!("Added {} ({})", added.name, added.hash_string),
        Err(err) => debug!("Submission failed: {err:?}"),
    }
    Report::from_outcome(&outcome)
}

/// Submits `torrent` to the Transmission daemon described by `connection`.
pub async fn submit_to_daemon(connection: &ConnectionConfig, torrent: &str) -> Report {
    match TransmissionClient::try_new(connection) {
        Ok(client) => submit(&client, torrent).await,
        Err(err) => {
            debug!("Could not set up RPC client: {err:?}");
            Report::from_outcome(&Err(err))
        }
    }
}
