//! Type conversion wrappers between transmission_client types and addtorrent_types.
//!
//! The newtype wrapper exists to satisfy the orphan rule since both the source
//! and target types are defined outside this crate.

use addtorrent_types::AddedTorrent;
use transmission_client::Torrent as TransmissionTorrent;

/// Wrapper for converting `TransmissionTorrent` to `AddedTorrent`.
#[derive(Debug)]
pub(crate) struct TransmissionTorrentWrapper(pub(crate) TransmissionTorrent);

impl From<TransmissionTorrentWrapper> for AddedTorrent {
    fn from(wrapper: TransmissionTorrentWrapper) -> Self {
        let value = wrapper.0;
        Self {
            id: value.id,
            name: value.name,
            hash_string: value.hash_string,
        }
    }
}
