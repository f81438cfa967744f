//! Stripe payment provider adapter.
//!
//! Implements the `CheckoutSessionReader` port for Stripe, used by the
//! server side of the payment verification handshake.
//!
//! # Security
//!
//! - The secret key is held as `secrecy::SecretString`
//! - Session IDs are checked before they are placed in a request path
//! - Test mode sessions can be refused in production
//!
//! # Configuration
//!
//! Required environment variables:
//! - `CREATOR_PLATFORM__PAYMENT__STRIPE_API_KEY`: Stripe secret API key

mod checkout_adapter;
mod mock_checkout_reader;
mod types;

pub use checkout_adapter::{StripeCheckoutAdapter, StripeConfig};
pub use mock_checkout_reader::MockCheckoutSessionReader;
pub use types::{StripeApiError, StripeCheckoutSession, StripeErrorResponse};
