//! Integration tests for the HTTP surface.
//!
//! Drives the full `app_router` (layers included) with `oneshot` requests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use creator_platform::adapters::http::{app_router, PaymentAppState};
use creator_platform::adapters::stripe::MockCheckoutSessionReader;
use creator_platform::config::ServerConfig;
use creator_platform::ports::PaymentError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(reader: MockCheckoutSessionReader) -> Router {
    app_router(PaymentAppState::new(Arc::new(reader)), &ServerConfig::default())
}

fn verify_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/functions/v1/verify-payment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn paid_subscription_returns_status_and_mode() {
    let reader = MockCheckoutSessionReader::new();
    reader.add_session(MockCheckoutSessionReader::paid_session("cs_test_1", "subscription"));

    let response = app(reader)
        .oneshot(verify_request(json!({ "session_id": "cs_test_1" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "paid", "mode": "subscription" })
    );
}

#[tokio::test]
async fn one_time_checkout_reports_tip_mode() {
    let reader = MockCheckoutSessionReader::new();
    reader.add_session(MockCheckoutSessionReader::paid_session("cs_tip", "payment"));

    let response = app(reader)
        .oneshot(verify_request(json!({ "session_id": "cs_tip" })))
        .await
        .unwrap();

    assert_eq!(json_body(response).await["mode"], "tip");
}

#[tokio::test]
async fn blank_session_is_bad_request() {
    let reader = MockCheckoutSessionReader::new();

    let response = app(reader.clone())
        .oneshot(verify_request(json!({ "session_id": "  " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "INVALID_SESSION");
    assert!(reader.calls().is_empty());
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let response = app(MockCheckoutSessionReader::new())
        .oneshot(verify_request(json!({ "session_id": "cs_unknown" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn provider_failure_is_bad_gateway_without_provider_text() {
    let reader = MockCheckoutSessionReader::new();
    reader.fail_next(PaymentError::provider("Invalid API Key provided: sk_test_****"));

    let response = app(reader)
        .oneshot(verify_request(json!({ "session_id": "cs_1" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "PROVIDER_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("sk_test"));
}

async fn assert_invalid_request(request: Request<Body>) {
    let response = app(MockCheckoutSessionReader::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "INVALID_REQUEST");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_string_session_id_is_invalid_request() {
    assert_invalid_request(verify_request(json!({ "session_id": 5 }))).await;
}

#[tokio::test]
async fn unparseable_body_is_invalid_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/functions/v1/verify-payment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    assert_invalid_request(request).await;
}

#[tokio::test]
async fn non_json_content_type_is_invalid_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/functions/v1/verify-payment")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"session_id":"cs_1"}"#))
        .unwrap();
    assert_invalid_request(request).await;
}

#[tokio::test]
async fn preflight_allows_supabase_client_headers() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/functions/v1/verify-payment")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "apikey,authorization,content-type,x-client-info",
        )
        .body(Body::empty())
        .unwrap();

    let response = app(MockCheckoutSessionReader::new())
        .oneshot(request)
        .await
        .unwrap();

    assert!(response.status().is_success());
    let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    for name in ["apikey", "authorization", "content-type", "x-client-info"] {
        assert!(allowed.contains(name), "{name} missing from {allowed}");
    }
}

#[tokio::test]
async fn manifest_is_served_as_manifest_json() {
    let response = app(MockCheckoutSessionReader::new())
        .oneshot(
            Request::builder()
                .uri("/manifest.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/manifest+json"
    );
    let body = json_body(response).await;
    assert_eq!(body["short_name"], "Creators");
    assert_eq!(body["icons"][1]["sizes"], "192x192");
}

#[tokio::test]
async fn health_returns_ok() {
    let response = app(MockCheckoutSessionReader::new())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
