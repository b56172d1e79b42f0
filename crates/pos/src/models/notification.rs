//! Transient UI notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use khales_core::NotificationId;

/// Maximum notifications retained; older entries are dropped on insert.
///
/// The list is otherwise append-only and would grow without bound, so
/// retention is an explicit policy here.
pub const NOTIFICATION_RETENTION: usize = 100;

/// A transient UI message. Never mutated except for the read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification ID.
    pub id: NotificationId,
    /// Short title.
    pub title: String,
    /// Message body.
    pub message: String,
    /// When the notification was emitted.
    pub date: DateTime<Utc>,
    /// Whether the user has seen it.
    pub is_read: bool,
}

impl Notification {
    /// Create a fresh unread notification.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: NotificationId::generate(),
            title: title.into(),
            message: message.into(),
            date,
            is_read: false,
        }
    }
}
