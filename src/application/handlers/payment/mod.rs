//! Payment handlers.
//!
//! - Checkout return flow run once when the return page mounts
//! - Server-side verification of a checkout session

mod handle_payment_return;
mod verify_checkout_session;

pub use handle_payment_return::{PaymentReturnHandler, PaymentReturnOutcome, VerificationCallback};
pub use verify_checkout_session::{
    VerifyCheckoutSessionCommand, VerifyCheckoutSessionHandler, VerifyPaymentError,
    MODE_METADATA_KEY,
};
