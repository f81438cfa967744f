//! Notification port - transient user feedback.

use crate::domain::payment::Notification;

/// Port for surfacing transient messages (toasts) to the user.
///
/// Presentation is fire-and-forget; implementations must not fail.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
