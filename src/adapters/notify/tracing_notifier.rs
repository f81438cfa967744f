//! Notifier that writes notifications to the tracing log.
//!
//! Used where no UI is attached (CLI tools, server-side flows).

use crate::domain::payment::{Notification, NotificationLevel};
use crate::ports::Notifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(level = ?notification.level, "{}", notification.message)
            }
            NotificationLevel::Error => tracing::warn!("{}", notification.message),
        }
    }
}
