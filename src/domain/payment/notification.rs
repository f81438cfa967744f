//! User-facing notifications for the payment return flow.

use serde::{Deserialize, Serialize};

use super::verification::{PaymentMode, VerificationResult};

pub const SUBSCRIPTION_SUCCESS_MESSAGE: &str =
    "Subscription activated! Thank you for supporting this creator.";
pub const TIP_SUCCESS_MESSAGE: &str = "Tip received! Thank you for supporting this creator.";
pub const GENERIC_SUCCESS_MESSAGE: &str = "Payment received! Thank you.";
pub const PAYMENT_PENDING_MESSAGE: &str =
    "Your payment is still processing. We'll update your account once it completes.";
pub const VERIFICATION_FAILED_MESSAGE: &str =
    "Payment verification failed. Please contact support if you were charged.";

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Copy shown after a verification call succeeded.
    pub fn for_verification(result: &VerificationResult) -> Self {
        if !result.is_paid() {
            return Self::new(NotificationLevel::Info, PAYMENT_PENDING_MESSAGE);
        }
        let message = match result.mode {
            PaymentMode::Subscription => SUBSCRIPTION_SUCCESS_MESSAGE,
            PaymentMode::OneTime => TIP_SUCCESS_MESSAGE,
            PaymentMode::Other(_) => GENERIC_SUCCESS_MESSAGE,
        };
        Self::new(NotificationLevel::Success, message)
    }

    /// Generic copy for every verification failure. Never carries error internals.
    pub fn verification_failed() -> Self {
        Self::new(NotificationLevel::Error, VERIFICATION_FAILED_MESSAGE)
    }
}
