//! Payment verification result types.
//!
//! The verification endpoint answers with two provider-defined strings. Known
//! values map to dedicated variants; anything else is kept verbatim so newer
//! provider values round-trip without loss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status as reported by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Funds captured.
    Paid,

    /// Checkout finished without a successful payment yet.
    Unpaid,

    /// Checkout completed with nothing to charge (e.g. 100% coupon).
    NoPaymentRequired,

    /// Any other provider value.
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::NoPaymentRequired => "no_payment_required",
            PaymentStatus::Other(s) => s,
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "paid" => PaymentStatus::Paid,
            "unpaid" => PaymentStatus::Unpaid,
            "no_payment_required" => PaymentStatus::NoPaymentRequired,
            _ => PaymentStatus::Other(value.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        PaymentStatus::from(value.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Business classification of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMode {
    /// Recurring creator subscription.
    Subscription,

    /// Single tip or purchase.
    OneTime,

    /// Any other provider value.
    Other(String),
}

impl PaymentMode {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMode::Subscription => "subscription",
            PaymentMode::OneTime => "tip",
            PaymentMode::Other(s) => s,
        }
    }
}

impl From<&str> for PaymentMode {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "subscription" => PaymentMode::Subscription,
            // Stripe reports one-off Checkout sessions as "payment".
            "tip" | "one-time" | "one_time" | "onetime" | "payment" => PaymentMode::OneTime,
            _ => PaymentMode::Other(value.to_string()),
        }
    }
}

impl From<String> for PaymentMode {
    fn from(value: String) -> Self {
        PaymentMode::from(value.as_str())
    }
}

impl From<PaymentMode> for String {
    fn from(value: PaymentMode) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of verifying a checkout session: the `(status, mode)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub status: PaymentStatus,
    pub mode: PaymentMode,
}

impl VerificationResult {
    pub fn new(status: impl Into<PaymentStatus>, mode: impl Into<PaymentMode>) -> Self {
        Self {
            status: status.into(),
            mode: mode.into(),
        }
    }

    /// Returns true once the provider has captured the funds.
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}
