//! Notifications shown in the navbar panel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NotificationId;

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Message,
    Warning,
    Success,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alert => write!(f, "Alert"),
            Self::Message => write!(f, "Message"),
            Self::Warning => write!(f, "Warning"),
            Self::Success => write!(f, "Success"),
        }
    }
}

/// A notification for the student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,

    /// Short title
    pub title: String,

    /// Message body
    pub message: String,

    /// Notification category
    pub kind: NotificationKind,

    /// Whether the student has seen it
    pub read: bool,

    /// When the notification was sent
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        read: bool,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            kind,
            read,
            sent_at,
        }
    }
}

/// Count the unread notifications in a collection
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        let now = Utc::now();
        let notifications = vec![
            Notification::new("A", "a", NotificationKind::Alert, false, now),
            Notification::new("B", "b", NotificationKind::Success, true, now),
            Notification::new("C", "c", NotificationKind::Warning, false, now),
        ];

        assert_eq!(unread_count(&notifications), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
