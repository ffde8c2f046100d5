//! Transient user-facing notifications.
//!
//! Front ends drain the receiving half and show each notification briefly;
//! nothing blocks on delivery.

use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

/// Sending half of the notification channel.
///
/// A notifier without a channel silently drops everything, which is what
/// tests and headless callers usually want.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    sender: Option<mpsc::UnboundedSender<Notification>>,
}

impl Notifier {
    /// Creates a notifier and the receiver its notifications arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(NotificationLevel::Info, title.into(), description.into());
    }

    pub fn warn(&self, title: impl Into<String>, description: impl Into<String>) {
        self.notify(NotificationLevel::Warning, title.into(), description.into());
    }

    fn notify(&self, level: NotificationLevel, title: String, description: String) {
        let Some(sender) = &self.sender else {
            return;
        };
        // Receiver gone means nobody is looking; drop it
        let _ = sender.send(Notification {
            level,
            title,
            description,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_delivers_in_order() {
        let (notifier, mut receiver) = Notifier::channel();
        notifier.info("Pet Updated", "Rex's details have been updated.");
        notifier.warn("Error", "boom");

        let first = receiver.try_recv().unwrap();
        assert_eq!(first.level, NotificationLevel::Info);
        assert_eq!(first.title, "Pet Updated");
        assert_eq!(receiver.try_recv().unwrap().level, NotificationLevel::Warning);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_disabled_and_closed_notifiers_do_not_panic() {
        Notifier::disabled().info("a", "b");

        let (notifier, receiver) = Notifier::channel();
        drop(receiver);
        notifier.warn("a", "b");
    }
}
