//! Request and response DTOs for the payment verification endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::payment::VerificationResult;

/// Body of `POST /functions/v1/verify-payment`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub session_id: String,
}

/// Successful verification answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub status: String,
    pub mode: String,
}

impl From<VerificationResult> for VerifyPaymentResponse {
    fn from(result: VerificationResult) -> Self {
        Self {
            status: result.status.to_string(),
            mode: result.mode.to_string(),
        }
    }
}

/// Error body. Serialized as `{ "error": CODE, "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    #[serde(rename = "error")]
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
