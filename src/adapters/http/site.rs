//! Site-level endpoints: web app manifest and health probe.

use axum::http::header;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::domain::manifest::BUNDLED_MANIFEST;

pub const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";

/// GET /manifest.json
pub async fn manifest() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, MANIFEST_CONTENT_TYPE)], BUNDLED_MANIFEST)
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// # Routes
/// - `GET /manifest.json` - Bundled web app manifest
/// - `GET /health` - Liveness probe
pub fn site_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/manifest.json", get(manifest))
        .route("/health", get(health))
}
