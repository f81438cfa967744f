//! Integration tests for the checkout return flow.
//!
//! Wires `PaymentReturnHandler` to in-memory notifier and location adapters
//! and a scripted verifier, then checks what the supporter would see.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use creator_platform::adapters::browser::InMemoryLocation;
use creator_platform::adapters::notify::InMemoryNotifier;
use creator_platform::application::handlers::payment::{PaymentReturnHandler, PaymentReturnOutcome};
use creator_platform::domain::payment::{
    NotificationLevel, SessionRef, VerificationResult, GENERIC_SUCCESS_MESSAGE,
    SUBSCRIPTION_SUCCESS_MESSAGE, TIP_SUCCESS_MESSAGE, VERIFICATION_FAILED_MESSAGE,
};
use creator_platform::ports::{BrowserLocation, PaymentError, PaymentVerifier};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Verifier returning a fixed answer and recording every session it saw.
struct ScriptedVerifier {
    answer: Result<VerificationResult, PaymentError>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedVerifier {
    fn ok(status: &str, mode: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(VerificationResult::new(status, mode)),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn err(error: PaymentError) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(error),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentVerifier for ScriptedVerifier {
    async fn verify(&self, session: &SessionRef) -> Result<VerificationResult, PaymentError> {
        self.seen.lock().unwrap().push(session.as_str().to_string());
        self.answer.clone()
    }
}

struct Page {
    notifier: Arc<InMemoryNotifier>,
    location: Arc<InMemoryLocation>,
    callbacks: Arc<AtomicUsize>,
    handler: PaymentReturnHandler,
}

fn mount(url: &str, verifier: Arc<ScriptedVerifier>) -> Page {
    let notifier = Arc::new(InMemoryNotifier::new());
    let location = Arc::new(InMemoryLocation::new(Url::parse(url).unwrap()));
    let callbacks = Arc::new(AtomicUsize::new(0));
    let counter = callbacks.clone();
    let handler = PaymentReturnHandler::new(verifier, notifier.clone(), location.clone())
        .with_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    Page {
        notifier,
        location,
        callbacks,
        handler,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn verifier_receives_exact_session_id_once() {
    let verifier = ScriptedVerifier::ok("paid", "subscription");
    let page = mount(
        "https://creators.example.com/c/ana?session_id=cs_test_a1B2c3",
        verifier.clone(),
    );

    page.handler.on_mount().await;
    page.handler.on_mount().await;

    assert_eq!(verifier.seen(), vec!["cs_test_a1B2c3".to_string()]);
    assert_eq!(page.callbacks.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn final_url_has_no_session_id_but_keeps_everything_else() {
    let page = mount(
        "https://creators.example.com/c/ana?utm_source=mail&session_id=cs_1&tab=posts#latest",
        ScriptedVerifier::ok("paid", "tip"),
    );

    page.handler.on_mount().await;

    let url = page.location.current_url();
    assert!(url.query_pairs().all(|(k, _)| k != "session_id"));
    assert_eq!(url.query(), Some("utm_source=mail&tab=posts"));
    assert_eq!(url.fragment(), Some("latest"));
}

#[tokio::test]
async fn success_copy_depends_on_mode() {
    let cases = [
        ("subscription", SUBSCRIPTION_SUCCESS_MESSAGE),
        ("tip", TIP_SUCCESS_MESSAGE),
        ("payment", TIP_SUCCESS_MESSAGE),
        ("donation", GENERIC_SUCCESS_MESSAGE),
    ];

    for (mode, expected) in cases {
        let page = mount(
            "https://creators.example.com/?session_id=cs_1",
            ScriptedVerifier::ok("paid", mode),
        );
        page.handler.on_mount().await;

        let shown = page.notifier.shown();
        assert_eq!(shown.len(), 1, "mode {}", mode);
        assert_eq!(shown[0].level, NotificationLevel::Success);
        assert_eq!(shown[0].message, expected, "mode {}", mode);
    }
}

#[tokio::test]
async fn each_failure_kind_shows_one_generic_error() {
    let failures = [
        PaymentError::network("connection refused"),
        PaymentError::rejected("No such checkout.session: cs_1"),
        PaymentError::malformed("missing field `status`"),
    ];

    for failure in failures {
        let page = mount(
            "https://creators.example.com/?session_id=cs_1",
            ScriptedVerifier::err(failure),
        );

        let outcome = page.handler.on_mount().await;

        assert_eq!(outcome, PaymentReturnOutcome::Failed);
        let shown = page.notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, NotificationLevel::Error);
        assert_eq!(shown[0].message, VERIFICATION_FAILED_MESSAGE);
        assert_eq!(page.callbacks.load(Ordering::SeqCst), 0);
        assert_eq!(page.location.current_url().query(), None);
    }
}

#[tokio::test]
async fn blank_session_id_is_ignored() {
    let verifier = ScriptedVerifier::ok("paid", "tip");
    let page = mount("https://creators.example.com/?session_id=%20%20", verifier.clone());

    assert_eq!(page.handler.on_mount().await, PaymentReturnOutcome::NoSession);
    assert!(verifier.seen().is_empty());
    assert_eq!(page.notifier.count(), 0);
    assert!(page.location.replacements().is_empty());
}
