//! Notifications delivered to the rendering layer.
//!
//! The core decides when a notification happens and what it says; showing it
//! (toast, banner, terminal line) is up to the [`Notifier`] implementation.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tokio::sync::mpsc;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Receives notifications from the session.
pub trait Notifier: Send + Sync {
    /// Deliver one notification.
    fn notify(&self, notification: Notification);
}

/// In-memory notification log.
///
/// Clones share the same log, so a caller can keep a handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notification so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages only, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|n| n.message).collect()
    }

    /// The most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Remove and return every notification.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Forwards notifications over a tokio channel to an async rendering task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver the rendering task should drain.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // The renderer may already be torn down
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification dropped, receiver closed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_log_clones_share_entries() {
        let log = NotificationLog::new();
        let handle = log.clone();

        log.notify(Notification::success("Vase added to cart"));
        log.notify(Notification::error("Please sign in"));

        assert_eq!(handle.messages(), vec!["Vase added to cart", "Please sign in"]);
        assert_eq!(handle.last().unwrap().level, Level::Error);
        assert_eq!(handle.drain().len(), 2);
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_channel_notifier_delivers() {
        let (notifier, mut rx) = ChannelNotifier::channel();
        notifier.notify(Notification::success("Welcome back, Ada!"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.message, "Welcome back, Ada!");
    }

    #[test]
    fn test_channel_notifier_tolerates_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::channel();
        drop(rx);
        notifier.notify(Notification::success("ignored"));
    }

    #[test]
    fn test_serializes_level_snake_case() {
        let json = serde_json::to_string(&Notification::error("x")).unwrap();
        assert_eq!(json, r#"{"level":"error","message":"x"}"#);
    }
}
