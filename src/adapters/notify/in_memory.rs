//! In-memory notifier for testing.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test code;
//! production code should use a real presenter.

use std::sync::RwLock;

use crate::domain::payment::Notification;
use crate::ports::Notifier;

/// Captures every notification for later assertions.
#[derive(Default)]
pub struct InMemoryNotifier {
    shown: RwLock<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications shown so far, oldest first.
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.read().expect("notifier lock poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.shown.read().expect("notifier lock poisoned").len()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.shown
            .write()
            .expect("notifier lock poisoned")
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::NotificationLevel;

    #[test]
    fn captures_in_order() {
        let notifier = InMemoryNotifier::new();
        notifier.notify(Notification::new(NotificationLevel::Info, "first"));
        notifier.notify(Notification::verification_failed());

        let shown = notifier.shown();
        assert_eq!(notifier.count(), 2);
        assert_eq!(shown[0].message, "first");
        assert_eq!(shown[1].level, NotificationLevel::Error);
    }
}
