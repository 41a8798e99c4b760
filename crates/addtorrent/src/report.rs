//! Delivers a [`Report`] to standard output or to the desktop notification service.

use std::io::{self, Write};

use notify_rust::{Notification, Timeout};
use thiserror::Error;
use tracing::debug;

use crate::outcome::Report;

/// Application name shown on notifications.
pub const APP_NAME: &str = "Torrent";

/// Icon shown on notifications.
pub const DEFAULT_ICON: &str = "message-email";

/// Error variants for [`Reporter`].
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report line could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    /// The notification service did not take the notification.
    #[error("failed to deliver notification: {0}")]
    Notification(String),
}

/// Sends desktop notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Shows a notification titled `summary` with `body` as its text.
    fn notify(&self, app_name: &str, summary: &str, body: &str) -> Result<(), ReportError>;
}

/// [`Notifier`] backed by the freedesktop notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    icon: String,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.into(),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, app_name: &str, summary: &str, body: &str) -> Result<(), ReportError> {
        Notification::new()
            .appname(app_name)
            .summary(summary)
            .body(body)
            .icon(&self.icon)
            .timeout(Timeout::Default)
            .show()
            .map_err(|e| ReportError::Notification(e.to_string()))?;
        Ok(())
    }
}

/// Writes reports either as a line on `out` or as a notification.
#[derive(Debug)]
pub struct Reporter<W, N> {
    out: W,
    notifier: N,
}

impl<W: Write, N: Notifier> Reporter<W, N> {
    /// Creates a reporter writing lines to `out` and notifications through `notifier`.
    pub fn new(out: W, notifier: N) -> Self {
        Self { out, notifier }
    }

    /// Delivers `report` through exactly one channel: the notifier when `notify` is set,
    /// `out` otherwise.
    pub fn report(&mut self, report: &Report, notify: bool) -> Result<(), ReportError> {
        if notify {
            debug!("Sending notification: {report}");
            return self
                .notifier
                .notify(APP_NAME, &report.summary, &report.text);
        }

        writeln!(self.out, "{report}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the reporter, returning its writer and notifier.
    pub fn into_parts(self) -> (W, N) {
        (self.out, self.notifier)
    }
}
