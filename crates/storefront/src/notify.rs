//! User-facing notifications.
//!
//! Cart operations report what happened ("Added Teddy to cart") through a
//! [`Notifier`]. Delivery is fire-and-forget: the cart never inspects or
//! waits on the result. Rendering (toasts, banners, terminal lines) belongs to
//! whatever implements the trait.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: std::fmt::Debug + Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => {
                tracing::info!(severity = ?notification.severity, "{}", notification.message);
            }
            Severity::Error => tracing::error!("{}", notification.message),
        }
    }
}

/// Collects notifications in memory.
///
/// Clones share the same buffer, so one handle can be given to the cart store
/// and another kept to read what was reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inner.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_shares_buffer() {
        let recorder = RecordingNotifier::new();
        let handle = recorder.clone();

        handle.notify(Notification::success("Added Teddy to cart"));
        handle.notify(Notification::info("Cart cleared"));

        let seen = recorder.notifications();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen.first().map(|n| n.severity), Some(Severity::Success));

        assert_eq!(recorder.drain().len(), 2);
        assert!(recorder.notifications().is_empty());
    }
}
