//! Benchmark runner.
//!
//! For every size and repetition one fresh input is generated; every selected
//! algorithm sorts its own clone of that input, so all algorithms see the same
//! data. Only the sort call is timed. Output is verified before the timing is
//! recorded. The observer is polled before every sort and can abandon the run.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::bench::config::BenchmarkConfig;
use crate::bench::report::{AlgorithmResult, BenchmarkReport, SizeResult};
use crate::error::{AlgoBenchError, Result};
use crate::input::InputGenerator;
use crate::sort::{verify_sorted, AlgorithmKind};

/// Hook for per-sort timings (metrics, progress output).
pub trait RunObserver: Send + Sync {
    fn on_sort(&self, kind: AlgorithmKind, size: usize, elapsed: Duration);

    /// `true` stops the run with `AlgoBenchError::Cancelled`.
    fn should_stop(&self) -> bool {
        false
    }
}

pub struct NoopObserver;

impl RunObserver for NoopObserver {
    fn on_sort(&self, _kind: AlgorithmKind, _size: usize, _elapsed: Duration) {}
}

pub struct BenchmarkRunner<'a> {
    cfg: BenchmarkConfig,
    observer: &'a dyn RunObserver,
}

impl<'a> BenchmarkRunner<'a> {
    /// Validates `cfg` up front; a runner always holds a runnable config.
    pub fn new(cfg: BenchmarkConfig, observer: &'a dyn RunObserver) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg, observer })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.cfg
    }

    pub fn run(&self) -> Result<BenchmarkReport> {
        let started = Instant::now();
        let algorithms = self.cfg.selected_algorithms();
        let mut generator = InputGenerator::new(self.cfg.min_value, self.cfg.max_value, self.cfg.seed)?;

        let mut samples: HashMap<(AlgorithmKind, usize), Vec<Duration>> = HashMap::new();

        for &size in &self.cfg.sizes {
            for rep in 0..self.cfg.repetitions {
                let input = generator.generate(size);
                for &kind in &algorithms {
                    if self.observer.should_stop() {
                        tracing::info!(size, rep, algorithm = %kind, "benchmark cancelled");
                        return Err(AlgoBenchError::Cancelled);
                    }
                    let mut data = input.clone();
                    let t0 = Instant::now();
                    kind.sorter().sort(&mut data)?;
                    let elapsed = t0.elapsed();

                    verify_sorted(kind, input.len(), &data)?;
                    self.observer.on_sort(kind, size, elapsed);
                    samples.entry((kind, size)).or_default().push(elapsed);
                }
                tracing::trace!(size, rep, "repetition done");
            }
            tracing::debug!(size, "size done");
        }

        let results = algorithms
            .iter()
            .map(|&kind| AlgorithmResult {
                algorithm: kind,
                name: kind.display_name(),
                timings: self
                    .cfg
                    .sizes
                    .iter()
                    .map(|&size| {
                        let runs = samples.get(&(kind, size)).map(Vec::as_slice).unwrap_or(&[]);
                        SizeResult::from_samples(size, runs)
                    })
                    .collect(),
            })
            .collect();

        let report = BenchmarkReport { results, elapsed: started.elapsed() };
        tracing::info!(
            algorithms = algorithms.len(),
            sizes = self.cfg.sizes.len(),
            repetitions = self.cfg.repetitions,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "benchmark completed"
        );
        Ok(report)
    }
}
