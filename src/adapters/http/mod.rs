//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `app_router` assembles them with the shared tower layers.

pub mod payment;
pub mod site;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use payment::{payment_router, PaymentAppState};
pub use site::site_router;

/// Full application router with tracing, CORS and request timeout layers.
pub fn app_router(state: PaymentAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(payment_router())
        .merge(site_router())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Browsers call the verification endpoint cross-origin from the site.
///
/// Supabase clients send `apikey` and `x-client-info` on every call, so both
/// must pass preflight. Without configured origins, development allows any origin and other
/// environments allow none.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("apikey"),
            HeaderName::from_static("x-client-info"),
        ]);

    if !origins.is_empty() {
        layer.allow_origin(AllowOrigin::list(origins))
    } else if server.environment == crate::config::Environment::Development {
        layer.allow_origin(AllowOrigin::any())
    } else {
        layer
    }
}
