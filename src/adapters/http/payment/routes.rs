//! Axum router configuration for payment endpoints.

use axum::{routing::post, Router};

use super::handlers::{verify_payment, PaymentAppState};

/// Create the payment router.
///
/// # Routes
/// - `POST /functions/v1/verify-payment` - Verify a checkout session
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().route("/functions/v1/verify-payment", post(verify_payment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockCheckoutSessionReader;
    use std::sync::Arc;

    #[test]
    fn payment_router_creates_router() {
        let state = PaymentAppState::new(Arc::new(MockCheckoutSessionReader::new()));
        let _: Router<()> = payment_router().with_state(state);
    }
}
