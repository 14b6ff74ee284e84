use crate::models::{Notification, NotificationCenter};
use crate::state::config::AppConfig;
use crate::state::UiStore;

#[derive(Debug)]
pub struct AppState {
    pub store: UiStore,
    pub notifications: NotificationCenter,
    pub status_message: Option<String>,
    pub show_shortcuts_dialog: bool,
    notification_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: UiStore::from_settings(&config.layout_settings),
            notifications: NotificationCenter::new(),
            status_message: None,
            show_shortcuts_dialog: false,
            notification_seq: 0,
        }
    }

    /// Returns `true` if the notification was new.
    pub fn push_notification(&mut self, notification: Notification) -> bool {
        self.notifications.push(notification)
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.latest()
    }

    /// Clears the notification the popup is showing.
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        let latest = self.notifications.latest().cloned()?;
        self.notifications.clear(&latest.id);
        Some(latest)
    }

    /// Builds a locally generated notification with a fresh id.
    pub fn local_notification(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Notification {
        self.notification_seq += 1;
        Notification::new(
            format!("local-{}", self.notification_seq),
            title,
            content,
            chrono::Utc::now(),
        )
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
