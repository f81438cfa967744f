//! Stripe API object types used by the checkout verification adapter.
//!
//! Only the fields the adapter reads are modelled; Stripe adds fields freely
//! and unknown ones are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ports::CheckoutSessionSummary;

/// Stripe Checkout Session object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeCheckoutSession {
    /// Unique session identifier (cs_...).
    pub id: String,

    /// Customer ID if customer was created/attached.
    pub customer: Option<String>,

    /// Session payment status (paid, unpaid, no_payment_required).
    pub payment_status: String,

    /// Session status (open, complete, expired).
    pub status: Option<String>,

    /// Payment mode (payment, setup, subscription).
    pub mode: String,

    /// Custom metadata attached to the session.
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    /// Whether the session was created with a live key.
    #[serde(default)]
    pub livemode: bool,
}

impl From<StripeCheckoutSession> for CheckoutSessionSummary {
    fn from(session: StripeCheckoutSession) -> Self {
        Self {
            id: session.id,
            payment_status: session.payment_status,
            mode: session.mode,
            customer_id: session.customer,
            metadata: session.metadata,
        }
    }
}

/// Stripe error envelope: `{ "error": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeApiError,
}

/// Stripe error object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeApiError {
    /// Error type (invalid_request_error, api_error, ...).
    #[serde(rename = "type")]
    pub error_type: Option<String>,

    /// Machine-readable code (e.g. resource_missing).
    pub code: Option<String>,

    /// Human-readable message.
    pub message: Option<String>,
}
