//! PaymentReturnHandler - Checkout return flow for a freshly mounted page.
//!
//! When the supporter lands back on the site after checkout the URL carries
//! `?session_id=...`. The handler verifies that session once, tells the
//! supporter what happened, hands the result to the host page and finally
//! scrubs the reference from the visible URL.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::payment::{strip_session_param, Notification, SessionRef, VerificationResult};
use crate::ports::{BrowserLocation, Notifier, PaymentVerifier};

/// Callback invoked with a successful verification result.
pub type VerificationCallback = Box<dyn Fn(&VerificationResult) + Send + Sync>;

/// What `on_mount` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentReturnOutcome {
    /// The flow already ran for this mount. Nothing happened.
    AlreadyRan,

    /// No usable `session_id` in the URL. Nothing happened.
    NoSession,

    /// The verifier answered; notification shown and callback invoked.
    Verified(VerificationResult),

    /// The verifier failed; the generic error notification was shown.
    Failed,
}

/// Handler for the post-checkout return flow.
pub struct PaymentReturnHandler {
    verifier: Arc<dyn PaymentVerifier>,
    notifier: Arc<dyn Notifier>,
    location: Arc<dyn BrowserLocation>,
    on_verified: Option<VerificationCallback>,
    has_run: AtomicBool,
}

impl PaymentReturnHandler {
    pub fn new(
        verifier: Arc<dyn PaymentVerifier>,
        notifier: Arc<dyn Notifier>,
        location: Arc<dyn BrowserLocation>,
    ) -> Self {
        Self {
            verifier,
            notifier,
            location,
            on_verified: None,
            has_run: AtomicBool::new(false),
        }
    }

    /// Registers the host page callback for successful verifications.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&VerificationResult) + Send + Sync + 'static,
    {
        self.on_verified = Some(Box::new(callback));
        self
    }

    /// Returns true once `on_mount` has been called.
    pub fn has_run(&self) -> bool {
        self.has_run.load(Ordering::Acquire)
    }

    /// Runs the return flow. Only the first call per handler does anything.
    ///
    /// Never returns an error: failures are logged and surfaced to the
    /// supporter as a single generic notification.
    pub async fn on_mount(&self) -> PaymentReturnOutcome {
        if self.has_run.swap(true, Ordering::AcqRel) {
            return PaymentReturnOutcome::AlreadyRan;
        }

        let url = self.location.current_url();
        let Some(session) = SessionRef::from_url(&url) else {
            tracing::debug!("No checkout session in return URL");
            return PaymentReturnOutcome::NoSession;
        };

        tracing::info!(session_ref = %session, "Verifying checkout session");

        let outcome = match self.verifier.verify(&session).await {
            Ok(result) => {
                tracing::info!(
                    session_ref = %session,
                    status = %result.status,
                    mode = %result.mode,
                    "Checkout session verified"
                );
                self.notifier.notify(Notification::for_verification(&result));
                if let Some(callback) = &self.on_verified {
                    callback(&result);
                }
                PaymentReturnOutcome::Verified(result)
            }
            Err(error) => {
                tracing::error!(
                    session_ref = %session,
                    error = %error,
                    code = %error.code,
                    "Payment verification failed"
                );
                self.notifier.notify(Notification::verification_failed());
                PaymentReturnOutcome::Failed
            }
        };

        // Runs on both paths so a reload never re-verifies.
        self.location.replace_url(strip_session_param(&url));

        outcome
    }
}
