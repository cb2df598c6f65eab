//! algobench
//!
//! - `algobench` / `algobench serve` : HTTP service (health, metrics, benchmark API)
//! - `algobench run ...`             : one-shot benchmark printed to stdout

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algobench_server::cli::{self, Cli};

/// Upper bound on waiting for blocking benchmark threads after `execute` returns.
const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    // stderr keeps stdout clean for `run --json`
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to start tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let res = runtime.block_on(cli::execute(cli));
    // dropping the runtime would join in-flight benchmark threads
    runtime.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), "{e}");
            ExitCode::FAILURE
        }
    }
}
