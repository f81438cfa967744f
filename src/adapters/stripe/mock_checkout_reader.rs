//! Mock checkout session reader for testing.
//!
//! Provides a configurable in-memory implementation of `CheckoutSessionReader`
//! for unit and integration tests. Supports:
//! - Pre-configured sessions
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CheckoutSessionReader, CheckoutSessionSummary, PaymentError};

/// Mock checkout session reader.
///
/// # Example
///
/// ```ignore
/// let mock = MockCheckoutSessionReader::new();
/// mock.add_session(MockCheckoutSessionReader::paid_session("cs_1", "subscription"));
///
/// let session = mock.retrieve_checkout_session("cs_1").await?;
/// assert_eq!(mock.calls(), vec!["cs_1"]);
/// ```
#[derive(Default, Clone)]
pub struct MockCheckoutSessionReader {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    sessions: HashMap<String, CheckoutSessionSummary>,
    next_error: Option<PaymentError>,
    calls: Vec<String>,
}

impl MockCheckoutSessionReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A completed, paid session with the given Stripe mode.
    pub fn paid_session(id: &str, mode: &str) -> CheckoutSessionSummary {
        CheckoutSessionSummary {
            id: id.to_string(),
            payment_status: "paid".to_string(),
            mode: mode.to_string(),
            customer_id: Some("cus_test123".to_string()),
            metadata: HashMap::new(),
        }
    }

    /// Add a session to the "provider".
    pub fn add_session(&self, session: CheckoutSessionSummary) {
        let id = session.id.clone();
        self.inner.lock().unwrap().sessions.insert(id, session);
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&self, error: PaymentError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Session IDs looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl CheckoutSessionReader for MockCheckoutSessionReader {
    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutSessionSummary>, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(session_id.to_string());
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        Ok(state.sessions.get(session_id).cloned())
    }
}
