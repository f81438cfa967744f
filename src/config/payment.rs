//! Stripe settings for the checkout verification endpoint

use serde::Deserialize;

use super::error::ValidationError;

const SECRET_KEY_PREFIX: &str = "sk_";
const LIVE_KEY_PREFIX: &str = "sk_live_";
const TEST_KEY_PREFIX: &str = "sk_test_";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret key used to read checkout sessions
    #[serde(default)]
    pub stripe_api_key: String,

    /// Refuse checkout sessions created in Stripe test mode
    #[serde(default)]
    pub require_livemode: bool,
}

impl PaymentConfig {
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with(TEST_KEY_PREFIX)
    }

    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with(LIVE_KEY_PREFIX)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        // Publishable and restricted keys cannot retrieve checkout sessions.
        if !self.stripe_api_key.starts_with(SECRET_KEY_PREFIX) {
            return Err(ValidationError::InvalidStripeKey);
        }
        // A test key only ever sees test sessions, which would all be refused.
        if self.require_livemode && !self.is_live_mode() {
            return Err(ValidationError::InvalidStripeKey);
        }
        Ok(())
    }
}
