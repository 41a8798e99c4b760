//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_PROFILE;

/// Add a torrent or magnet link to a Transmission daemon.
#[derive(Debug, Parser)]
#[command(name = "addtorrent", version, about, long_about = None)]
pub struct Cli {
    /// Define profile to read from config file.
    #[arg(short, long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Use Desktop Notification for output.
    #[arg(short, long)]
    pub notify: bool,

    /// Read profiles from this file instead of $XDG_CONFIG_HOME/addtorrent.conf.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Torrent file, URL or magnet link to add to Transmission.
    #[arg(value_name = "TORRENT")]
    pub torrent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["addtorrent", "magnet:?xt=urn:btih:abc"]).unwrap();
        assert_eq!(cli.profile, "default");
        assert!(!cli.notify);
        assert!(cli.config.is_none());
        assert_eq!(cli.torrent, "magnet:?xt=urn:btih:abc");
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from([
            "addtorrent",
            "-p",
            "nas",
            "-n",
            "-c",
            "/etc/addtorrent.conf",
            "file.torrent",
        ])
        .unwrap();
        assert_eq!(cli.profile, "nas");
        assert!(cli.notify);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/addtorrent.conf")));
        assert_eq!(cli.torrent, "file.torrent");
    }

    #[test]
    fn long_flags() {
        let cli =
            Cli::try_parse_from(["addtorrent", "--profile", "work", "--notify", "x.torrent"])
                .unwrap();
        assert_eq!(cli.profile, "work");
        assert!(cli.notify);
    }

    #[test]
    fn torrent_is_required() {
        assert!(Cli::try_parse_from(["addtorrent", "-n"]).is_err());
    }
}
