//! Flowcheck - Main Entry Point
//!
//! Runs the FocusFlow API contract suite against the configured deployment,
//! prints the report on stdout and exits 0 when every assertion passed,
//! 1 when any failed and 2 when the run could not be set up.

use std::process::ExitCode;

use flowcheck_application::{ApplicationResult, HarnessConfig, TestRunner};
use flowcheck_infrastructure::{ConsoleReporter, ReqwestHttpClient};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "could not start the contract run");
            ExitCode::from(2)
        }
    }
}

async fn run() -> ApplicationResult<bool> {
    let config = HarnessConfig::from_env()?;
    info!(
        api_base = %config.api_base(),
        timeout_secs = config.timeout().as_secs(),
        "starting contract run"
    );

    let client = ReqwestHttpClient::new(&config)?;
    let mut runner = TestRunner::new(client, config.api_base());
    let mut reporter = ConsoleReporter::stdout();

    Ok(runner.run_all_tests(&mut reporter).await)
}
