//! Fire-and-forget user notifications.
//!
//! The session store reports outcomes (login success, invalid credentials,
//! logout, ...) through a `Notifier`. Whoever holds the receiving end shows
//! them as transient messages in arrival order. Sending never blocks and
//! never fails; with nobody listening the message is dropped.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

pub type NotificationReceiver = UnboundedReceiver<Notification>;

#[derive(Debug, Clone, Default)]
pub struct Notifier {
    tx: Option<UnboundedSender<Notification>>,
}

impl Notifier {
    /// Create a connected notifier and its receiving end
    pub fn channel() -> (Self, NotificationReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// A notifier that discards everything
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(NotificationLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(NotificationLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.send(NotificationLevel::Info, message.into());
    }

    fn send(&self, level: NotificationLevel, message: String) {
        debug!(?level, %message, "Notification");
        if let Some(ref tx) = self.tx {
            // Receiver gone means nobody is displaying notifications anymore
            let _ = tx.send(Notification { level, message });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_arrive_in_order() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.success("first");
        notifier.error("second");
        notifier.info("third");

        let levels: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|n| (n.level, n.message))
            .collect();
        assert_eq!(
            levels,
            vec![
                (NotificationLevel::Success, "first".to_string()),
                (NotificationLevel::Error, "second".to_string()),
                (NotificationLevel::Info, "third".to_string()),
            ]
        );
    }

    #[test]
    fn test_send_without_receiver_is_silent() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.info("nobody listening");

        Notifier::disabled().error("dropped");
    }
}
