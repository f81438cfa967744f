//! Supabase Edge Function client for payment verification.
//!
//! Implements the `PaymentVerifier` port by invoking the verification
//! function with `{ "session_id": ... }` and reading `{ "status", "mode" }`.
//!
//! Three failure classes are kept apart for logging:
//! - transport failures (`NetworkError`)
//! - errors the function reports itself (`RemoteRejected`, `AuthenticationError`)
//! - bodies that do not match the expected shape (`MalformedResponse`)

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::payment::{SessionRef, VerificationResult};
use crate::ports::{PaymentError, PaymentErrorCode, PaymentVerifier};

use super::client_config::SupabaseClientConfig;

#[derive(Debug, Serialize)]
struct VerifyPaymentRequest<'a> {
    session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyPaymentResponse {
    status: String,
    mode: String,
}

/// Error body returned by Edge Functions. Deployments differ in which field
/// carries the text.
#[derive(Debug, Default, Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
    error: Option<serde_json::Value>,
}

impl RemoteErrorBody {
    fn text(&self) -> Option<String> {
        if let Some(message) = self.message.as_ref().filter(|m| !m.is_empty()) {
            return Some(message.clone());
        }
        match &self.error {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Object(obj)) => obj
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Payment verifier backed by a Supabase Edge Function.
pub struct SupabaseFunctionsClient {
    config: SupabaseClientConfig,
    function_name: String,
    http_client: reqwest::Client,
}

impl SupabaseFunctionsClient {
    /// Create a client whose requests time out after `timeout`.
    pub fn with_timeout(
        config: SupabaseClientConfig,
        function_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PaymentError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PaymentError::configuration(e.to_string()))?;
        Ok(Self {
            config,
            function_name: function_name.into(),
            http_client,
        })
    }
}

#[async_trait]
impl PaymentVerifier for SupabaseFunctionsClient {
    async fn verify(&self, session: &SessionRef) -> Result<VerificationResult, PaymentError> {
        let url = self
            .config
            .endpoint(&format!("functions/v1/{}", self.function_name))
            .map_err(|e| PaymentError::configuration(format!("Invalid function URL: {}", e)))?;

        let request = self.config.authorize(self.http_client.post(url)).json(
            &VerifyPaymentRequest {
                session_id: session.as_str(),
            },
        );

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Map an HTTP status and body onto the verification contract.
fn interpret_response(status: StatusCode, body: &str) -> Result<VerificationResult, PaymentError> {
    if !status.is_success() {
        let parsed: RemoteErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .text()
            .unwrap_or_else(|| format!("Verification endpoint returned HTTP {}", status.as_u16()));

        let code = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PaymentErrorCode::AuthenticationError
            }
            StatusCode::TOO_MANY_REQUESTS => PaymentErrorCode::RateLimitExceeded,
            _ => PaymentErrorCode::RemoteRejected,
        };
        return Err(PaymentError::new(code, message));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| PaymentError::malformed(format!("Invalid JSON: {}", e)))?;

    // Some functions answer 200 with an error payload.
    if value.get("error").is_some_and(|e| !e.is_null()) {
        let parsed: RemoteErrorBody = serde_json::from_value(value).unwrap_or_default();
        return Err(PaymentError::rejected(
            parsed
                .text()
                .unwrap_or_else(|| "Verification failed".to_string()),
        ));
    }

    let response: VerifyPaymentResponse = serde_json::from_value(value)
        .map_err(|e| PaymentError::malformed(format!("Unexpected response shape: {}", e)))?;

    if response.status.trim().is_empty() || response.mode.trim().is_empty() {
        return Err(PaymentError::malformed("Empty status or mode"));
    }

    Ok(VerificationResult::new(response.status, response.mode))
}
