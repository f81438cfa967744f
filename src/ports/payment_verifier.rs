//! Payment verifier port for the checkout return handshake.
//!
//! Defines the contract for confirming a checkout session after the payment
//! provider redirected the supporter back to the app. Implementations call a
//! remote verification endpoint; they never charge or mutate anything.
//!
//! # Design
//!
//! - **Single input**: the session reference is the only argument
//! - **No retries**: callers surface failures instead of looping
//! - **Typed failures**: network, remote-reported and malformed-response
//!   errors stay distinguishable for logging

use crate::domain::payment::{SessionRef, VerificationResult};
use async_trait::async_trait;

/// Port for verifying a checkout session.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Verify the session and return its `(status, mode)` pair.
    async fn verify(&self, session: &SessionRef) -> Result<VerificationResult, PaymentError>;
}

/// Errors from payment verification and provider calls.
#[derive(Debug, Clone)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation could be retried by an operator.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an error reported by the remote endpoint itself.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::RemoteRejected, message)
    }

    /// Create an error for a response that does not match the expected shape.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::MalformedResponse, message)
    }

    /// Create an error for a client that cannot be built from its settings.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Configuration, message)
    }

    /// Create a provider API error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Remote endpoint reported a business error (e.g. account not found).
    RemoteRejected,

    /// Response body did not have the expected shape.
    MalformedResponse,

    /// Local settings produced an unusable client or URL.
    Configuration,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::RemoteRejected => "remote_rejected",
            PaymentErrorCode::MalformedResponse => "malformed_response",
            PaymentErrorCode::Configuration => "configuration_error",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_verifier_is_object_safe() {
        fn _accepts_dyn(_verifier: &dyn PaymentVerifier) {}
    }

    #[test]
    fn payment_error_retryable() {
        assert!(PaymentErrorCode::NetworkError.is_retryable());
        assert!(PaymentErrorCode::RateLimitExceeded.is_retryable());

        assert!(!PaymentErrorCode::RemoteRejected.is_retryable());
        assert!(!PaymentErrorCode::MalformedResponse.is_retryable());
        assert!(!PaymentErrorCode::Configuration.is_retryable());
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::rejected("account not found");
        assert_eq!(err.to_string(), "remote_rejected: account not found");
    }

    #[test]
    fn with_provider_code_keeps_code() {
        let err = PaymentError::provider("No such checkout.session").with_provider_code("resource_missing");
        assert_eq!(err.provider_code.as_deref(), Some("resource_missing"));
        assert_eq!(err.code, PaymentErrorCode::ProviderError);
    }
}
