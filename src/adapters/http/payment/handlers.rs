//! HTTP handlers for the payment verification endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    VerifyCheckoutSessionCommand, VerifyCheckoutSessionHandler, VerifyPaymentError,
};
use crate::ports::CheckoutSessionReader;

use super::dto::{ErrorResponse, VerifyPaymentRequest, VerifyPaymentResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for payment routes.
#[derive(Clone)]
pub struct PaymentAppState {
    pub checkout_reader: Arc<dyn CheckoutSessionReader>,
}

impl PaymentAppState {
    pub fn new(checkout_reader: Arc<dyn CheckoutSessionReader>) -> Self {
        Self { checkout_reader }
    }

    pub fn verify_handler(&self) -> VerifyCheckoutSessionHandler {
        VerifyCheckoutSessionHandler::new(self.checkout_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /functions/v1/verify-payment
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<VerifyPaymentResponse>, PaymentApiError> {
    let Json(request) = payload?;
    let result = state
        .verify_handler()
        .handle(VerifyCheckoutSessionCommand {
            session_id: request.session_id,
        })
        .await?;

    Ok(Json(result.into()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts verification errors to HTTP responses.
pub enum PaymentApiError {
    /// Body missing, not JSON, or not shaped like `VerifyPaymentRequest`.
    InvalidRequest(String),
    Verification(VerifyPaymentError),
}

impl From<VerifyPaymentError> for PaymentApiError {
    fn from(err: VerifyPaymentError) -> Self {
        Self::Verification(err)
    }
}

impl From<JsonRejection> for PaymentApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            Self::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_REQUEST", message),
            ),
            Self::Verification(err) => verification_error_body(&err),
        };

        (status, Json(body)).into_response()
    }
}

fn verification_error_body(err: &VerifyPaymentError) -> (StatusCode, ErrorResponse) {
    match err {
        VerifyPaymentError::InvalidSession => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("INVALID_SESSION", "session_id is required"),
        ),
        VerifyPaymentError::SessionNotFound(_) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("SESSION_NOT_FOUND", "Checkout session not found"),
        ),
        VerifyPaymentError::Provider(err) => {
            // Provider text stays in the logs.
            tracing::error!(
                code = %err.code,
                provider_code = ?err.provider_code,
                error = %err.message,
                "Checkout session lookup failed"
            );
            (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("PROVIDER_ERROR", "Payment provider request failed"),
            )
        }
    }
}
