//! Migration runner.
//!
//! `migrate` applies the configured SQL file statement by statement.
//! `migrate test` only checks that the database is reachable.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, WrapErr};

use creator_platform::adapters::supabase::{SupabaseClientConfig, SupabaseSqlClient};
use creator_platform::application::handlers::migration::{
    completion_message, CheckConnectivityHandler, RunMigrationHandler,
};
use creator_platform::config::AppConfig;
use creator_platform::domain::migration::SplitStrategy;
use creator_platform::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// `test` runs the connectivity check instead of the migration
    #[arg(value_enum)]
    command: Option<Command>,

    /// SQL file to apply (overrides configuration)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Table counted by the connectivity check (overrides configuration)
    #[arg(long)]
    table: Option<String>,

    /// Statement splitting strategy (overrides configuration)
    #[arg(long, value_enum)]
    split: Option<SplitArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Test,
}

#[derive(Clone, Copy, ValueEnum)]
enum SplitArg {
    Naive,
    SqlAware,
}

impl From<SplitArg> for SplitStrategy {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Naive => SplitStrategy::Naive,
            SplitArg::SqlAware => SplitStrategy::SqlAware,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()
        .into_diagnostic()
        .wrap_err("failed to load configuration")?;
    if let Some(file) = cli.file {
        config.migration.file = file;
    }
    if let Some(table) = cli.table {
        config.migration.connectivity_table = table;
    }
    if let Some(split) = cli.split {
        config.migration.split_strategy = split.into();
    }
    config
        .validate_for_migrations()
        .into_diagnostic()
        .wrap_err("invalid configuration")?;

    telemetry::init(&config.server.log_level, config.server.json_logs())
        .into_diagnostic()
        .wrap_err("failed to initialize tracing")?;

    let client_config = SupabaseClientConfig::service_role(&config.supabase).into_diagnostic()?;
    let executor = Arc::new(
        SupabaseSqlClient::with_timeout(client_config, config.server.request_timeout())
            .into_diagnostic()?,
    );

    match cli.command {
        Some(Command::Test) => {
            let report = CheckConnectivityHandler::new(executor)
                .check(&config.migration.connectivity_table)
                .await;
            println!("{}", report);
            Ok(exit_code(report.is_reachable()))
        }
        None => {
            let handler = RunMigrationHandler::new(executor, config.migration.split_strategy);
            let report = handler
                .run_file(&config.migration.file)
                .await
                .into_diagnostic()?;
            println!("{}", completion_message(&report));
            Ok(exit_code(report.summary.is_success()))
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
