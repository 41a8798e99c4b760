//! Internal trait abstracting Transmission RPC operations.
//!
//! This module provides the [`TransmissionOps`] trait which abstracts the underlying
//! transmission client, enabling mocking in tests.

use transmission_client::{Client, ClientError, Torrent as TransmissionTorrent};

/// Internal trait that abstracts the transmission client operations.
/// This allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait TransmissionOps {
    /// `torrent-add` with a `filename` argument: a magnet link, URL, or daemon-side path.
    async fn torrent_add_filename(
        &self,
        filename: &str,
    ) -> Result<Option<TransmissionTorrent>, ClientError>;
    /// `torrent-add` with base64-encoded `.torrent` contents.
    async fn torrent_add_metainfo(
        &self,
        metainfo: &str,
    ) -> Result<Option<TransmissionTorrent>, ClientError>;
    async fn torrents(
        &self,
        ids: Option<Vec<i32>>,
    ) -> Result<Vec<TransmissionTorrent>, ClientError>;
}

impl TransmissionOps for Client {
    async fn torrent_add_filename(
        &self,
        filename: &str,
    ) -> Result<Option<TransmissionTorrent>, ClientError> {
        Client::torrent_add_filename(self, filename).await
    }

    async fn torrent_add_metainfo(
        &self,
        metainfo: &str,
    ) -> Result<Option<TransmissionTorrent>, ClientError> {
        Client::torrent_add_metainfo(self, metainfo).await
    }

    async fn torrents(
        &self,
        ids: Option<Vec<i32>>,
    ) -> Result<Vec<TransmissionTorrent>, ClientError> {
        Client::torrents(self, ids).await
    }
}
