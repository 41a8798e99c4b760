//! Connection profiles read from `addtorrent.conf`.
//!
//! The file is INI: each section is a profile with `SERVER`, `PORT`, `USER` and `PASSW`
//! keys. Key names are case-insensitive, and keys of a `[DEFAULT]` section apply to every
//! profile that exists in the file. Nothing here fails: whatever is missing falls back to
//! [`ConnectionConfig::default`] one key at a time.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use addtorrent_types::ConnectionConfig;
use ini::{Ini, ParseOption, Properties};
use tracing::{debug, warn};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "addtorrent.conf";

/// Profile used when none is given on the command line.
pub const DEFAULT_PROFILE: &str = "default";

/// Section whose keys every profile inherits.
const DEFAULT_SECTION: &str = "DEFAULT";

/// Returns `${XDG_CONFIG_HOME:-~/.config}/addtorrent.conf`.
///
/// An empty `xdg_config_home` counts as unset. A leading `~` expands to `home`, or to the
/// current directory when the home directory is unknown.
pub fn config_path(xdg_config_home: Option<&str>, home: Option<&Path>) -> PathBuf {
    let dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .unwrap_or("~/.config");
    expand_tilde(dir, home).join(CONFIG_FILE_NAME)
}

/// [`config_path`] for the current process environment.
pub fn default_config_path() -> PathBuf {
    let xdg_config_home = env::var("XDG_CONFIG_HOME").ok();
    config_path(xdg_config_home.as_deref(), dirs::home_dir().as_deref())
}

fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return PathBuf::from(path);
    };

    let home = home.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    if rest.is_empty() { home } else { home.join(rest) }
}

/// Resolves the connection settings of `profile` from the file at `path`.
pub fn resolve(path: &Path, profile: &str) -> ConnectionConfig {
    match fs::read_to_string(path) {
        Ok(contents) => profile_from_str(&contents, profile),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            ConnectionConfig::default()
        }
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            ConnectionConfig::default()
        }
    }
}

/// Resolves the connection settings of `profile` from INI text.
pub fn profile_from_str(contents: &str, profile: &str) -> ConnectionConfig {
    // Values are taken verbatim: no quote stripping, no backslash escapes.
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };

    let ini = match Ini::load_from_str_opt(contents, options) {
        Ok(ini) => ini,
        Err(e) => {
            warn!("Malformed config file: {}, using defaults", e);
            return ConnectionConfig::default();
        }
    };

    if ini.section(Some(profile)).is_none() {
        debug!("Profile {profile} not found, using defaults");
    }

    let defaults = ConnectionConfig::default();
    let get = |key: &str| lookup(&ini, profile, key).map(str::to_string);
    ConnectionConfig {
        server: get("SERVER").unwrap_or(defaults.server),
        port: get("PORT").unwrap_or(defaults.port),
        user: get("USER"),
        password: get("PASSW"),
    }
}

/// Looks `key` up in `profile`, then in `[DEFAULT]`. A profile missing from the file has
/// no keys at all, inherited ones included.
fn lookup<'a>(ini: &'a Ini, profile: &str, key: &str) -> Option<&'a str> {
    let section = ini.section(Some(profile))?;
    find_key(section, key).or_else(|| {
        ini.section(Some(DEFAULT_SECTION))
            .and_then(|defaults| find_key(defaults, key))
    })
}

fn find_key<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section
        .iter()
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case(key))
        .map(|(_, value)| value.trim())
        .last()
        .filter(|value| !value.is_empty())
}
