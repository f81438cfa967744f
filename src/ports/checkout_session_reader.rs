//! Checkout session reader port.
//!
//! Server-side half of the verification handshake: looks up a checkout
//! session at the payment provider.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::PaymentError;

/// Port for retrieving checkout sessions from the payment provider.
#[async_trait]
pub trait CheckoutSessionReader: Send + Sync {
    /// Retrieve a checkout session by provider ID.
    ///
    /// Returns `Ok(None)` when the provider does not know the session.
    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutSessionSummary>, PaymentError>;
}

/// Provider-neutral view of a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionSummary {
    /// Provider's session ID.
    pub id: String,

    /// Provider payment status (`paid`, `unpaid`, `no_payment_required`).
    pub payment_status: String,

    /// Provider checkout mode (`payment`, `subscription`, `setup`).
    pub mode: String,

    /// Provider's customer ID, if one was attached.
    pub customer_id: Option<String>,

    /// Metadata attached when the session was created.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}
