//! Command line surface of the `algobench` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use algobench_core::bench::{parse_sizes, BenchmarkConfig, BenchmarkRunner, NoopObserver};
use algobench_core::error::{AlgoBenchError, Result};
use algobench_core::sort::AlgorithmKind;

use crate::{app_state::AppState, config, server};

#[derive(Debug, Parser)]
#[command(name = "algobench", version, about = "Sorting algorithm benchmarks over HTTP or the command line")]
pub struct Cli {
    /// YAML config file (defaults to ./algobench.yaml when present)
    #[arg(long, env = "ALGOBENCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP service (default)
    Serve(ServeArgs),
    /// Run benchmarks once and print the report
    Run(RunArgs),
}

#[derive(Debug, Args, Default)]
pub struct ServeArgs {
    /// Override server.listen
    #[arg(long)]
    pub listen: Option<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Comma separated array sizes
    #[arg(short, long, default_value = "100,1000,10000")]
    pub sizes: String,

    /// Runs per algorithm and size
    #[arg(short, long, default_value_t = 10)]
    pub repetitions: u32,

    /// Smallest generated value (inclusive)
    #[arg(long = "min", default_value_t = 0, allow_hyphen_values = true)]
    pub min_value: i32,

    /// Largest generated value (inclusive)
    #[arg(long = "max", default_value_t = 100, allow_hyphen_values = true)]
    pub max_value: i32,

    /// Fix the input generator seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma separated subset of algorithms (default: all)
    #[arg(short, long)]
    pub algorithms: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    pub fn to_config(&self) -> Result<BenchmarkConfig> {
        let cfg = BenchmarkConfig {
            sizes: parse_sizes(&self.sizes)?,
            repetitions: self.repetitions,
            min_value: self.min_value,
            max_value: self.max_value,
            seed: self.seed,
            algorithms: match self.algorithms.as_deref() {
                Some(a) => AlgorithmKind::parse_list(a)?,
                None => Vec::new(),
            },
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Run(args)) => {
            let out = tokio::task::spawn_blocking(move || run_once(&args))
                .await
                .map_err(|e| AlgoBenchError::Internal(format!("benchmark task failed: {e}")))??;
            print!("{out}");
            Ok(())
        }
        Some(Command::Serve(args)) => serve(cli.config, args).await,
        None => serve(cli.config, ServeArgs::default()).await,
    }
}

/// Run a benchmark in-process and return what should be printed.
pub fn run_once(args: &RunArgs) -> Result<String> {
    let cfg = args.to_config()?;
    let runner = BenchmarkRunner::new(cfg, &NoopObserver)?;
    let report = runner.run()?;

    if args.json {
        let mut out = serde_json::to_string_pretty(&serde_json::json!({
            "config": runner.config(),
            "results": report.results,
            "executionTimeMs": report.elapsed.as_millis() as u64,
        }))
        .map_err(|e| AlgoBenchError::Internal(format!("serialize report failed: {e}")))?;
        out.push('\n');
        return Ok(out);
    }

    Ok(format!(
        "{}\n{}\nTotal time: {} ms\n",
        runner.config().describe(),
        report.render_table(),
        report.elapsed.as_millis()
    ))
}

async fn serve(config_path: Option<PathBuf>, args: ServeArgs) -> Result<()> {
    let mut cfg = config::load(config_path.as_deref())?;
    if let Some(listen) = args.listen {
        cfg.server.listen = listen;
        cfg.server.validate()?;
    }
    let addr = cfg.server.listen_addr()?;
    let grace = cfg.server.shutdown_grace();

    let state = AppState::new(cfg);
    let server = server::Server::bind(addr, state).await?;
    tracing::info!(
        "health check: http://{}/api/health",
        server.local_addr()
    );
    server.serve(server::shutdown_signal(), grace).await
}
