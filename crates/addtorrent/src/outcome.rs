//! Turns the result of a submission into the line shown to the user.

use std::{fmt, sync::LazyLock};

use addtorrent_types::{AddedTorrent, SubmitError};
use regex::Regex;

/// Greedy match from the first to the last double quote.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.*)""#).expect("quoted-fragment pattern is valid"));

/// Summary of a successful submission.
pub const ADDED: &str = "Added";
/// Summary of a failure to reach or talk to the daemon.
pub const CONNECTION: &str = "Connection";
/// Summary of a submission the daemon refused.
pub const ERROR: &str = "Error";

/// The user-facing result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// One of [`ADDED`], [`CONNECTION`] or [`ERROR`].
    pub summary: String,
    /// The torrent name, or the failure detail.
    pub text: String,
}

impl Report {
    /// Report for a torrent the daemon accepted.
    pub fn added(name: impl Into<String>) -> Self {
        Self {
            summary: ADDED.into(),
            text: name.into(),
        }
    }

    fn connection(message: impl Into<String>) -> Self {
        Self {
            summary: CONNECTION.into(),
            text: message.into(),
        }
    }

    fn error(detail: impl Into<String>) -> Self {
        Self {
            summary: ERROR.into(),
            text: detail.into(),
        }
    }

    /// Classifies a bare failure message.
    ///
    /// Messages mentioning `Request` come from the transport and are shown as they are.
    /// Anything else is a daemon rejection, reduced to its quoted detail when it has one.
    pub fn from_failure(message: &str) -> Self {
        if message.contains("Request") {
            return Self::connection(message);
        }
        Self::error(extract_quoted(message).unwrap_or(message))
    }

    /// Classifies the result of a submission by error kind.
    ///
    /// User-supplied text in the error (paths, torrent references) never affects the summary.
    pub fn from_outcome(outcome: &Result<AddedTorrent, SubmitError>) -> Self {
        let err = match outcome {
            Ok(torrent) => return Self::added(torrent.name.as_str()),
            Err(err) => err,
        };

        match err {
            SubmitError::Network(_)
            | SubmitError::Unauthorized
            | SubmitError::InvalidUrl(_)
            | SubmitError::Other(_) => Self::connection(err.to_string()),
            SubmitError::ServerError(result) => Self::error(result.as_str()),
            SubmitError::NoTorrent(_) | SubmitError::FileSystem(_) => Self::error(err.to_string()),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.text)
    }
}

/// Returns the text between the first and the last double quote of `message`.
pub fn extract_quoted(message: &str) -> Option<&str> {
    QUOTED
        .captures(message)
        .and_then(|captures| captures.get(1))
        .map(|quoted| quoted.as_str())
}
