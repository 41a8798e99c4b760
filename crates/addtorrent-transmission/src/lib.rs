//! # Torrent submission using Transmission RPC.
//!
//! usage:
//!
//! ```rust,ignore
//! use addtorrent_transmission::TransmissionClient;
//! use addtorrent_types::{ConnectionConfig, TorrentSubmitter};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransmissionClient::try_new(&ConnectionConfig::default())?;
//!     let torrent = client.add("magnet:?xt=urn:btih:...").await?;
//!     println!("Added torrent: {}", torrent.name);
//!     Ok(())
//! }
//! ```
//!

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod client;
mod conversions;
mod ops;
#[cfg(test)]
mod testutil;

pub use client::TransmissionClient;
