//! Stripe checkout session adapter.
//!
//! Implements the `CheckoutSessionReader` trait against the Stripe API:
//! `GET /v1/checkout/sessions/{id}` authenticated with the secret key.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key).with_require_livemode(true);
//! let adapter = StripeCheckoutAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::ports::{CheckoutSessionReader, CheckoutSessionSummary, PaymentError, PaymentErrorCode};

use super::types::{StripeCheckoutSession, StripeErrorResponse};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// Whether to reject sessions created in test mode.
    require_livemode: bool,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            require_livemode: false,
        }
    }

    /// Build from the application payment configuration.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self::new(config.stripe_api_key.clone()).with_require_livemode(config.require_livemode)
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Require livemode sessions in production.
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }
}

/// Stripe checkout session adapter.
pub struct StripeCheckoutAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeCheckoutAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn session_url(&self, session_id: &str) -> String {
        format!(
            "{}/v1/checkout/sessions/{}",
            self.config.api_base_url, session_id
        )
    }

    /// Convert a Stripe session, enforcing livemode when required.
    fn accept_session(
        &self,
        session: StripeCheckoutSession,
    ) -> Result<CheckoutSessionSummary, PaymentError> {
        if self.config.require_livemode && !session.livemode {
            tracing::warn!(session_id = %session.id, "Rejected test mode checkout session");
            return Err(PaymentError::rejected(
                "Test mode sessions not allowed in production",
            ));
        }
        Ok(session.into())
    }
}

/// Stripe IDs are ASCII alphanumerics and underscores. Anything else cannot
/// exist and must not reach the request path.
fn is_plausible_session_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Map a non-success Stripe response onto a payment error.
fn provider_error(status: reqwest::StatusCode, body: &str) -> PaymentError {
    let parsed = serde_json::from_str::<StripeErrorResponse>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|e| e.error.message.clone())
        .unwrap_or_else(|| format!("Stripe API error (HTTP {})", status.as_u16()));

    let code = match status {
        reqwest::StatusCode::UNAUTHORIZED => PaymentErrorCode::AuthenticationError,
        reqwest::StatusCode::TOO_MANY_REQUESTS => PaymentErrorCode::RateLimitExceeded,
        _ => PaymentErrorCode::ProviderError,
    };

    let error = PaymentError::new(code, message);
    match parsed.and_then(|e| e.error.code) {
        Some(provider_code) => error.with_provider_code(provider_code),
        None => error,
    }
}

#[async_trait]
impl CheckoutSessionReader for StripeCheckoutAdapter {
    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<Option<CheckoutSessionSummary>, PaymentError> {
        if !is_plausible_session_id(session_id) {
            tracing::debug!(session_id, "Skipping lookup of malformed session id");
            return Ok(None);
        }

        let response = self
            .http_client
            .get(self.session_url(session_id))
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %error_text, "Stripe retrieve checkout session failed");
            return Err(provider_error(status, &error_text));
        }

        let session: StripeCheckoutSession = response.json().await.map_err(|e| {
            PaymentError::malformed(format!("Failed to parse Stripe response: {}", e))
        })?;

        self.accept_session(session).map(Some)
    }
}
