use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_id: Option<i64>,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            timestamp,
            todo_id: None,
        }
    }

    pub fn with_todo(mut self, todo_id: i64) -> Self {
        self.todo_id = Some(todo_id);
        self
    }
}

/// In-memory notification store, de-duplicated by id.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: HashMap<String, Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a notification with the same id is already stored.
    pub fn push(&mut self, notification: Notification) -> bool {
        if self.notifications.contains_key(&notification.id) {
            tracing::debug!("Notification already stored, skipping: {}", notification.id);
            return false;
        }

        tracing::info!(
            "Stored notification: {} - {}",
            notification.id,
            notification.title
        );
        self.notifications
            .insert(notification.id.clone(), notification);
        true
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.notifications
            .values()
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)))
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.get(id)
    }

    pub fn clear(&mut self, id: &str) -> bool {
        let removed = self.notifications.remove(id).is_some();
        if removed {
            tracing::debug!("Cleared notification: {}", id);
        }
        removed
    }

    pub fn clear_all(&mut self) -> usize {
        let count = self.notifications.len();
        self.notifications.clear();
        tracing::info!("Cleared all notifications ({})", count);
        count
    }

    pub fn count(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
