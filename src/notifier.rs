//! Desktop notification capability
//!
//! Notifications are best effort. The application holds a `Box<dyn Notifier>`
//! chosen once at startup by `select_notifier`; when no notification service
//! is reachable it gets a `NoopNotifier`, so the counter logic never has to
//! check for one.

use std::time::Duration;

use notify_rust::{Notification, Timeout};
use thiserror::Error;

use crate::APP_TITLE;

/// Errors a notifier may report. Callers are free to ignore them.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("no notification service available")]
    Unavailable,

    #[error("notification backend error: {0}")]
    Backend(String),
}

/// Something that can show a desktop notification
pub trait Notifier {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Show a notification. `timeout` is a display duration hint.
    fn notify(&self, title: &str, message: &str, timeout: Duration) -> Result<(), NotifyError>;
}

/// Which notifier to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierMode {
    /// Desktop notifications if a service is available, otherwise none
    #[default]
    Auto,
    /// Desktop notifications, requested explicitly
    Desktop,
    /// Never notify
    Disabled,
}

/// Notifications through the OS notification service (notify-rust)
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            app_name: APP_TITLE.to_string(),
        }
    }

    /// Check once whether a notification service can be reached
    #[cfg(all(unix, not(target_os = "macos")))]
    pub fn detect() -> Result<Self, NotifyError> {
        let info = notify_rust::get_server_information().map_err(|e| {
            tracing::debug!("notification server query failed: {}", e);
            NotifyError::Unavailable
        })?;
        tracing::debug!(
            server = %info.name,
            version = %info.version,
            "notification server found"
        );
        Ok(Self::new())
    }

    /// Check once whether a notification service can be reached
    #[cfg(not(all(unix, not(target_os = "macos"))))]
    pub fn detect() -> Result<Self, NotifyError> {
        Ok(Self::new())
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn notify(&self, title: &str, message: &str, timeout: Duration) -> Result<(), NotifyError> {
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        Notification::new()
            .appname(&self.app_name)
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(millis))
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Backend(e.to_string()))
    }
}

/// Notifier that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn name(&self) -> &'static str {
        "none"
    }

    fn notify(&self, _title: &str, _message: &str, _timeout: Duration) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Pick a notifier for `mode`, falling back to `NoopNotifier` when the
/// desktop service is unavailable
pub fn select_notifier(mode: NotifierMode) -> Box<dyn Notifier> {
    select_with(mode, DesktopNotifier::detect)
}

/// Selection logic behind `select_notifier`, with the capability check
/// passed in. `check` is only called for `Auto` and `Desktop`.
fn select_with<F>(mode: NotifierMode, check: F) -> Box<dyn Notifier>
where
    F: FnOnce() -> Result<DesktopNotifier, NotifyError>,
{
    match mode {
        NotifierMode::Disabled => {
            tracing::info!("notifications disabled");
            Box::new(NoopNotifier)
        }
        NotifierMode::Auto | NotifierMode::Desktop => match check() {
            Ok(desktop) => {
                tracing::info!("using desktop notifications");
                Box::new(desktop)
            }
            Err(e) => {
                tracing::warn!("desktop notifications unavailable ({}), continuing without", e);
                Box::new(NoopNotifier)
            }
        },
    }
}
