//! Creator platform HTTP server.
//!
//! Serves the checkout verification endpoint, the web app manifest and a
//! health probe.

use std::sync::Arc;

use miette::{IntoDiagnostic, Result, WrapErr};

use creator_platform::adapters::http::{app_router, PaymentAppState};
use creator_platform::adapters::stripe::{StripeCheckoutAdapter, StripeConfig};
use creator_platform::config::AppConfig;
use creator_platform::domain::manifest::WebManifest;
use creator_platform::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()
        .into_diagnostic()
        .wrap_err("failed to load configuration")?;
    config
        .validate_for_server()
        .into_diagnostic()
        .wrap_err("invalid configuration")?;

    telemetry::init(&config.server.log_level, config.server.json_logs())
        .into_diagnostic()
        .wrap_err("failed to initialize tracing")?;

    tracing::info!("Creator platform v{}", env!("CARGO_PKG_VERSION"));
    if config.payment.is_test_mode() {
        tracing::warn!("Stripe test mode key in use");
    }

    WebManifest::bundled()
        .into_diagnostic()
        .wrap_err("bundled manifest is not valid JSON")?
        .validate()
        .into_diagnostic()
        .wrap_err("bundled manifest is incomplete")?;

    let stripe = StripeCheckoutAdapter::new(StripeConfig::from_payment_config(&config.payment));
    let state = PaymentAppState::new(Arc::new(stripe));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr().into_diagnostic()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
