//! Transmission RPC client implementation.

use std::{fs, path::Path};

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, warn};
use transmission_client::{
    Authentication, Client, ClientError, Torrent as TransmissionTorrent,
};

use addtorrent_types::{AddedTorrent, ConnectionConfig, SubmitError, TorrentSubmitter};

use crate::conversions::TransmissionTorrentWrapper;
use crate::ops::TransmissionOps;


/// TransmissionClient submits torrents over Transmission RPC.
#[allow(missing_debug_implementations, private_bounds)]
pub struct TransmissionClient<T: TransmissionOps = Client> {
    client: T,
}

impl TransmissionClient {
    /// Create a new TransmissionClient for the daemon described by `config`.
    ///
    /// Credentials are only sent when both a user and a password are configured.
    /// No request is made until a torrent is added.
    pub fn try_new(config: &ConnectionConfig) -> Result<Self, SubmitError> {
        let url = config.rpc_url()?;

        debug!("Connecting to Transmission RPC at {}", url);
        let client = Client::new(url);
        match (&config.user, &config.password) {
            (Some(username), Some(password)) => {
                client.set_authentication(Some(Authentication {
                    username: username.clone(),
                    password: password.clone(),
                }));
            }
            (Some(username), None) => {
                warn!("No password configured for RPC user {username}, connecting anonymously");
            }
            _ => {}
        }

        Ok(Self { client })
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TransmissionClient<T> {
    /// Create a TransmissionClient with a custom client implementation.
    /// This is primarily useful for testing with mocks.
    #[cfg(test)]
    pub(crate) fn with_client(client: T) -> Self {
        Self { client }
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TorrentSubmitter for TransmissionClient<T> {
    async fn add(&self, torrent: &str) -> Result<AddedTorrent, SubmitError> {
        let added = match local_torrent_file(torrent) {
            Some(path) => {
                debug!("Adding torrent from local file: {}", path.display());
                let metainfo = read_metainfo(path)?;
                self.client.torrent_add_metainfo(&metainfo).await
            }
            None => {
                debug!("Adding torrent by reference: {}", torrent);
                self.client.torrent_add_filename(torrent).await
            }
        }
        .map_err(map_client_error)?;

        let added = match added {
            Some(added) => added,
            None => self.find_duplicate(torrent).await?,
        };

        debug!("Added {added:?}");
        Ok(TransmissionTorrentWrapper(added).into())
    }
}

#[allow(private_bounds)]
impl<T: TransmissionOps> TransmissionClient<T> {
    /// Looks up a torrent the daemon already had, which `torrent-add` answers without a
    /// `torrent-added` entry. Only magnet links carry a hash to match on.
    async fn find_duplicate(&self, torrent: &str) -> Result<TransmissionTorrent, SubmitError> {
        let missing = || SubmitError::NoTorrent(torrent.to_string());
        let hash = magnet_info_hash(torrent).ok_or_else(missing)?;

        debug!("No torrent in reply, looking for {hash} on the daemon");
        self.client
            .torrents(None)
            .await
            .map_err(map_client_error)?
            .into_iter()
            .find(|t| t.hash_string.eq_ignore_ascii_case(hash))
            .ok_or_else(missing)
    }
}

/// Returns the `xt=urn:btih:` hash of a magnet link.
fn magnet_info_hash(torrent: &str) -> Option<&str> {
    torrent
        .strip_prefix("magnet:?")?
        .split('&')
        .find_map(|param| param.strip_prefix("xt=urn:btih:"))
}

/// Returns the path of a `.torrent` file that exists on this machine.
///
/// Magnet links, remote URLs and paths that only exist on the daemon's side yield `None`
/// and are passed to the daemon untouched.
fn local_torrent_file(torrent: &str) -> Option<&Path> {
    let path = Path::new(torrent.strip_prefix("file://").unwrap_or(torrent));
    path.is_file().then_some(path)
}

/// Reads a `.torrent` file and encodes it the way `torrent-add` expects its `metainfo`.
fn read_metainfo(path: &Path) -> Result<String, SubmitError> {
    let bytes = fs::read(path)
        .map_err(|e| SubmitError::FileSystem(format!("{}: {}", path.display(), e)))?;
    Ok(STANDARD.encode(bytes))
}

/// Maps transmission client errors to submission errors.
fn map_client_error(err: ClientError) -> SubmitError {
    match err {
        ClientError::TransmissionUnauthorized => SubmitError::Unauthorized,
        ClientError::TransmissionError(msg) => SubmitError::ServerError(msg),
        ClientError::NetworkError(e) => SubmitError::Network(e.to_string()),
        ClientError::SerdeError(e) => SubmitError::Other(e.to_string()),
    }
}
