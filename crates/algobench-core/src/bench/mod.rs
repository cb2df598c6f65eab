//! Benchmark orchestration.
//!
//! - `config` : run parameters, parsing helpers, and limit checks
//! - `runner` : generates inputs, times every sorter, verifies output
//! - `report` : aggregated timings and the text table rendering

pub mod config;
pub mod report;
pub mod runner;

pub use config::{parse_sizes, BenchmarkConfig, RunLimits};
pub use report::{AlgorithmResult, BenchmarkReport, SizeResult};
pub use runner::{BenchmarkRunner, NoopObserver, RunObserver};
