//! # addtorrent types
//!
//! This crate defines the connection settings, the submission error type and the
//! [`TorrentSubmitter`] trait shared by the addtorrent crates.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Host used when a profile does not name one.
pub const DEFAULT_SERVER: &str = "localhost";

/// Port used when a profile does not name one.
pub const DEFAULT_PORT: &str = "9091";

/// Path of the RPC endpoint on a Transmission daemon.
pub const RPC_PATH: &str = "/transmission/rpc";

/// Error type for torrent submissions.
///
/// The `Display` output follows the message convention of Transmission RPC clients:
/// anything that kept the request from completing starts with `Request failed`, and a
/// daemon rejection quotes the daemon's result string.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Network-related errors (connection refused, unreachable host, timeouts, etc.)
    #[error("Request failed: {0}")]
    Network(String),

    /// The daemon refused the supplied credentials.
    #[error("Request failed: authentication required")]
    Unauthorized,

    /// The RPC endpoint could not be built from the connection settings.
    #[error("Request failed: invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// The daemon answered with a non-success result, e.g. `invalid or corrupt torrent file`.
    #[error("Query failed with result \"{0}\"")]
    ServerError(String),

    /// The daemon accepted the request but returned no torrent.
    #[error("daemon returned no torrent for {0}")]
    NoTorrent(String),

    /// A local torrent file could not be read.
    #[error("file system error: {0}")]
    FileSystem(String),

    /// The daemon's response could not be decoded.
    #[error("Request failed: unexpected response: {0}")]
    Other(String),
}

/// Connection parameters for a Transmission daemon.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Host name, address, or full URL of the daemon.
    pub server: String,
    /// RPC port, kept as written in the configuration file.
    pub port: String,
    /// RPC user name.
    pub user: Option<String>,
    /// RPC password.
    pub password: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.into(),
            port: DEFAULT_PORT.into(),
            user: None,
            password: None,
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credentials.
        write!(
            f,
            "Connection(server=\"{}\", port=\"{}\", user={:?}, password=<{}>)",
            self.server,
            self.port,
            self.user,
            if self.password.is_some() {
                "set"
            } else {
                "unset"
            },
        )
    }
}

impl ConnectionConfig {
    /// Builds the RPC endpoint URL.
    ///
    /// A bare host becomes `http://{server}:{port}/transmission/rpc`. A server written as a
    /// URL keeps its scheme, and its own port and path when present; otherwise `port` and
    /// the default RPC path are filled in.
    pub fn rpc_url(&self) -> Result<Url, SubmitError> {
        let server = self.server.trim();

        if !server.contains("://") {
            let port = self.port_number()?;
            let host = if server.contains(':') && !server.starts_with('[') {
                format!("[{server}]")
            } else {
                server.to_string()
            };
            return Url::parse(&format!("http://{host}:{port}{RPC_PATH}"))
                .map_err(|e| SubmitError::InvalidUrl(format!("{server}: {e}")));
        }

        let mut url =
            Url::parse(server).map_err(|e| SubmitError::InvalidUrl(format!("{server}: {e}")))?;
        if url.port().is_none() {
            let port = self.port_number()?;
            url.set_port(Some(port))
                .map_err(|()| SubmitError::InvalidUrl(format!("{server}: cannot carry a port")))?;
        }
        if matches!(url.path(), "" | "/") {
            url.set_path(RPC_PATH);
        }

        Ok(url)
    }

    fn port_number(&self) -> Result<u16, SubmitError> {
        self.port
            .trim()
            .parse()
            .map_err(|_| SubmitError::InvalidUrl(format!("invalid port \"{}\"", self.port)))
    }
}

/// A torrent the daemon has accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedTorrent {
    /// Daemon-assigned torrent ID.
    pub id: i32,
    /// Torrent name, as reported by the daemon.
    pub name: String,
    /// Info hash.
    pub hash_string: String,
}

/// Submits torrents to a remote daemon.
#[allow(async_fn_in_trait)]
pub trait TorrentSubmitter {
    /// Adds a torrent by reference: a magnet link, a URL, or a path to a `.torrent` file.
    async fn add(&self, torrent: &str) -> Result<AddedTorrent, SubmitError>;
}
