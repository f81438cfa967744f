//! VerifyCheckoutSessionHandler - Server side of the verification handshake.
//!
//! Looks the session up at the payment provider and reduces it to the
//! `(status, mode)` pair the return page understands.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::payment::{SessionRef, VerificationResult};
use crate::ports::{CheckoutSessionReader, CheckoutSessionSummary, PaymentError};

/// Metadata key that overrides the provider's checkout mode.
pub const MODE_METADATA_KEY: &str = "mode";

/// Command to verify a checkout session.
#[derive(Debug, Clone)]
pub struct VerifyCheckoutSessionCommand {
    /// Raw session id as submitted by the client.
    pub session_id: String,
}

/// Errors from checkout session verification.
#[derive(Debug, Error)]
pub enum VerifyPaymentError {
    #[error("Session id is missing or blank")]
    InvalidSession,

    #[error("Checkout session not found: {0}")]
    SessionNotFound(String),

    #[error(transparent)]
    Provider(#[from] PaymentError),
}

/// Handler for verifying checkout sessions.
pub struct VerifyCheckoutSessionHandler {
    reader: Arc<dyn CheckoutSessionReader>,
}

impl VerifyCheckoutSessionHandler {
    pub fn new(reader: Arc<dyn CheckoutSessionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        cmd: VerifyCheckoutSessionCommand,
    ) -> Result<VerificationResult, VerifyPaymentError> {
        let session =
            SessionRef::new(cmd.session_id).map_err(|_| VerifyPaymentError::InvalidSession)?;

        let summary = self
            .reader
            .retrieve_checkout_session(session.as_str())
            .await?
            .ok_or_else(|| VerifyPaymentError::SessionNotFound(session.to_string()))?;

        Ok(summarize(&summary))
    }
}

fn summarize(summary: &CheckoutSessionSummary) -> VerificationResult {
    let mode = summary
        .metadata
        .get(MODE_METADATA_KEY)
        .filter(|mode| !mode.trim().is_empty())
        .unwrap_or(&summary.mode);

    VerificationResult::new(summary.payment_status.as_str(), mode.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockCheckoutSessionReader;
    use crate::domain::payment::{PaymentMode, PaymentStatus};
    use crate::ports::PaymentErrorCode;

    #[tokio::test]
    async fn paid_subscription_session_verifies() {
        let reader = MockCheckoutSessionReader::new();
        reader.add_session(MockCheckoutSessionReader::paid_session("cs_test_1", "subscription"));
        let handler = VerifyCheckoutSessionHandler::new(Arc::new(reader.clone()));

        let result = handler
            .handle(VerifyCheckoutSessionCommand {
                session_id: "cs_test_1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, PaymentStatus::Paid);
        assert_eq!(result.mode, PaymentMode::Subscription);
        assert_eq!(reader.calls(), vec!["cs_test_1".to_string()]);
    }

    #[tokio::test]
    async fn provider_payment_mode_maps_to_one_time() {
        let reader = MockCheckoutSessionReader::new();
        reader.add_session(MockCheckoutSessionReader::paid_session("cs_tip", "payment"));
        let handler = VerifyCheckoutSessionHandler::new(Arc::new(reader));

        let result = handler
            .handle(VerifyCheckoutSessionCommand {
                session_id: "cs_tip".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.mode, PaymentMode::OneTime);
        assert_eq!(result.mode.as_str(), "tip");
    }

    #[tokio::test]
    async fn metadata_mode_overrides_provider_mode() {
        let reader = MockCheckoutSessionReader::new();
        let mut metadata = std::collections::HashMap::new();
        metadata.insert(MODE_METADATA_KEY.to_string(), "subscription".to_string());
        reader.add_session(CheckoutSessionSummary {
            id: "cs_meta".to_string(),
            payment_status: "paid".to_string(),
            mode: "payment".to_string(),
            customer_id: None,
            metadata,
        });
        let handler = VerifyCheckoutSessionHandler::new(Arc::new(reader));

        let result = handler
            .handle(VerifyCheckoutSessionCommand {
                session_id: "cs_meta".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.mode, PaymentMode::Subscription);
    }

    #[tokio::test]
    async fn blank_session_is_rejected_without_lookup() {
        let reader = MockCheckoutSessionReader::new();
        let handler = VerifyCheckoutSessionHandler::new(Arc::new(reader.clone()));

        let result = handler
            .handle(VerifyCheckoutSessionCommand {
                session_id: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(VerifyPaymentError::InvalidSession)));
        assert!(reader.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = VerifyCheckoutSessionHandler::new(Arc::new(MockCheckoutSessionReader::new()));

        let result = handler
            .handle(VerifyCheckoutSessionCommand {
                session_id: "cs_missing".to_string(),
            })
            .await;

        assert!(matches!(result, Err(VerifyPaymentError::SessionNotFound(id)) if id == "cs_missing"));
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let reader = MockCheckoutSessionReader::new();
        reader.fail_next(PaymentError::network("connection reset"));
        let handler = VerifyCheckoutSessionHandler::new(Arc::new(reader));

        let result = handler
            .handle(VerifyCheckoutSessionCommand {
                session_id: "cs_1".to_string(),
            })
            .await;

        match result {
            Err(VerifyPaymentError::Provider(err)) => {
                assert_eq!(err.code, PaymentErrorCode::NetworkError)
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }
}
