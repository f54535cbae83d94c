//! Transient user-facing messages.
//!
//! Every session outcome is pushed to a broadcast channel so any number of
//! views can show it. Sending never blocks and never fails the operation;
//! slow readers simply lag.

use tokio::sync::broadcast;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn notify(&self, notification: Notification) {
        match notification.variant {
            Variant::Info => info!(title = %notification.title, description = %notification.description, "Notify"),
            Variant::Destructive => warn!(title = %notification.title, description = %notification.description, "Notify"),
        }
        // No receivers is fine.
        let _ = self.sender.send(notification);
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(Notification::info(title, description));
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(Notification::destructive(title, description));
    }
}
