//! HTTP adapter for payment endpoints.
//!
//! - `POST /functions/v1/verify-payment` - Verify a checkout session

pub mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, VerifyPaymentRequest, VerifyPaymentResponse};
pub use handlers::{verify_payment, PaymentApiError, PaymentAppState};
pub use routes::payment_router;
