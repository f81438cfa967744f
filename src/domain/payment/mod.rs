//! Payment module - checkout return handshake vocabulary.
//!
//! - `SessionRef` - the checkout session reference read from the return URL
//! - `VerificationResult` - `(status, mode)` pair reported by the verifier
//! - `Notification` - copy shown to the supporter after verification
//! - `strip_session_param` - URL cleanup once the reference was consumed

mod notification;
mod return_url;
mod session_ref;
mod verification;

pub use notification::{
    Notification, NotificationLevel, GENERIC_SUCCESS_MESSAGE, PAYMENT_PENDING_MESSAGE,
    SUBSCRIPTION_SUCCESS_MESSAGE, TIP_SUCCESS_MESSAGE, VERIFICATION_FAILED_MESSAGE,
};
pub use return_url::strip_session_param;
pub use session_ref::{SessionRef, SESSION_QUERY_PARAM};
pub use verification::{PaymentMode, PaymentStatus, VerificationResult};
