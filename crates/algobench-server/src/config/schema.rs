use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use algobench_core::bench::RunLimits;
use algobench_core::error::{AlgoBenchError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgoBenchConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub benchmark: BenchmarkSection,
}

impl Default for AlgoBenchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            benchmark: BenchmarkSection::default(),
        }
    }
}

impl AlgoBenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AlgoBenchError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.benchmark.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// 0 waits for in-flight requests without a deadline.
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.shutdown_grace_ms > 120_000 {
            return Err(AlgoBenchError::BadRequest(
                "server.shutdown_grace_ms must be between 0 and 120000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            AlgoBenchError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }

    pub fn shutdown_grace(&self) -> Option<Duration> {
        (self.shutdown_grace_ms > 0).then(|| Duration::from_millis(self.shutdown_grace_ms))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkSection {
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    #[serde(default = "default_max_repetitions")]
    pub max_repetitions: u32,

    #[serde(default = "default_max_total_elements")]
    pub max_total_elements: u64,

    #[serde(default = "default_max_concurrent_runs")]
    pub max_concurrent_runs: usize,

    /// Estimated comparisons per run (`n^2` for quadratic sorts).
    #[serde(default = "default_max_work")]
    pub max_work: u64,
}

impl Default for BenchmarkSection {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            max_repetitions: default_max_repetitions(),
            max_total_elements: default_max_total_elements(),
            max_concurrent_runs: default_max_concurrent_runs(),
            max_work: default_max_work(),
        }
    }
}

impl BenchmarkSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10_000_000).contains(&self.max_size) {
            return Err(AlgoBenchError::BadRequest(
                "benchmark.max_size must be between 1 and 10000000".into(),
            ));
        }
        if !(1..=10_000).contains(&self.max_repetitions) {
            return Err(AlgoBenchError::BadRequest(
                "benchmark.max_repetitions must be between 1 and 10000".into(),
            ));
        }
        if self.max_total_elements < self.max_size as u64 {
            return Err(AlgoBenchError::BadRequest(
                "benchmark.max_total_elements must be at least max_size".into(),
            ));
        }
        if !(1..=64).contains(&self.max_concurrent_runs) {
            return Err(AlgoBenchError::BadRequest(
                "benchmark.max_concurrent_runs must be between 1 and 64".into(),
            ));
        }
        if self.max_work == 0 {
            return Err(AlgoBenchError::BadRequest(
                "benchmark.max_work must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn limits(&self) -> RunLimits {
        RunLimits {
            max_size: self.max_size,
            max_repetitions: self.max_repetitions,
            max_total_elements: self.max_total_elements,
            max_work: self.max_work,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_shutdown_grace_ms() -> u64 {
    10_000
}
fn default_max_size() -> usize {
    100_000
}
fn default_max_repetitions() -> u32 {
    100
}
fn default_max_total_elements() -> u64 {
    50_000_000
}
fn default_max_concurrent_runs() -> usize {
    2
}
fn default_max_work() -> u64 {
    10_000_000_000
}
