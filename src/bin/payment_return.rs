//! Replays the checkout return flow for a URL.
//!
//! Useful to check a deployed verification function end to end:
//!
//! ```text
//! payment-return "https://creators.example.com/c/ana?session_id=cs_test_123"
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use url::Url;

use creator_platform::adapters::browser::InMemoryLocation;
use creator_platform::adapters::notify::TracingNotifier;
use creator_platform::adapters::supabase::{SupabaseClientConfig, SupabaseFunctionsClient};
use creator_platform::application::handlers::payment::{PaymentReturnHandler, PaymentReturnOutcome};
use creator_platform::config::AppConfig;
use creator_platform::ports::BrowserLocation;
use creator_platform::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Return URL as the browser received it
    url: Url,

    /// Signed-in supporter's access token (defaults to the anon key)
    #[arg(long, env = "SUPABASE_ACCESS_TOKEN")]
    access_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .into_diagnostic()
        .wrap_err("failed to load configuration")?;
    config
        .validate_for_payment_return()
        .into_diagnostic()
        .wrap_err("invalid configuration")?;

    telemetry::init(&config.server.log_level, config.server.json_logs())
        .into_diagnostic()
        .wrap_err("failed to initialize tracing")?;

    let mut client_config = SupabaseClientConfig::anon(&config.supabase).into_diagnostic()?;
    if let Some(token) = cli.access_token {
        client_config = client_config.with_access_token(token);
    }
    let verifier = SupabaseFunctionsClient::with_timeout(
        client_config,
        config.supabase.verify_function.clone(),
        config.server.request_timeout(),
    )
    .into_diagnostic()?;

    let location = Arc::new(InMemoryLocation::new(cli.url));
    let handler = PaymentReturnHandler::new(
        Arc::new(verifier),
        Arc::new(TracingNotifier::new()),
        location.clone(),
    )
    .with_callback(|result| println!("status={} mode={}", result.status, result.mode));

    let outcome = handler.on_mount().await;
    println!("{}", location.current_url());

    Ok(match outcome {
        PaymentReturnOutcome::Verified(_) | PaymentReturnOutcome::NoSession => ExitCode::SUCCESS,
        PaymentReturnOutcome::Failed | PaymentReturnOutcome::AlreadyRan => ExitCode::FAILURE,
    })
}
