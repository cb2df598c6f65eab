use serde::Serialize;

use crate::error::{AlgoBenchError, Result};
use crate::sort::{AlgorithmKind, COUNTING_MAX_RANGE};

pub const DEFAULT_SIZES: [usize; 3] = [100, 1000, 10000];
pub const DEFAULT_REPETITIONS: u32 = 10;
pub const DEFAULT_MIN_VALUE: i32 = 0;
pub const DEFAULT_MAX_VALUE: i32 = 100;

/// Parameters of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub repetitions: u32,
    pub min_value: i32,
    pub max_value: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Empty means every algorithm.
    pub algorithms: Vec<AlgorithmKind>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
            algorithms: Vec::new(),
        }
    }
}

impl BenchmarkConfig {
    /// Algorithms to run, in registry order.
    pub fn selected_algorithms(&self) -> Vec<AlgorithmKind> {
        if self.algorithms.is_empty() {
            return AlgorithmKind::ALL.to_vec();
        }
        AlgorithmKind::ALL
            .into_iter()
            .filter(|k| self.algorithms.contains(k))
            .collect()
    }

    /// Shape checks that hold regardless of deployment limits.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(AlgoBenchError::BadRequest("sizes must not be empty".into()));
        }
        if self.sizes.contains(&0) {
            return Err(AlgoBenchError::BadRequest("sizes must be greater than 0".into()));
        }
        if self.repetitions == 0 {
            return Err(AlgoBenchError::BadRequest("repetitions must be greater than 0".into()));
        }
        if self.min_value > self.max_value {
            return Err(AlgoBenchError::BadRequest(format!(
                "minValue ({}) must not exceed maxValue ({})",
                self.min_value, self.max_value
            )));
        }
        // decided from the requested range, never from the drawn data
        if self.selected_algorithms().contains(&AlgorithmKind::Counting)
            && self.value_span() > COUNTING_MAX_RANGE
        {
            return Err(AlgoBenchError::LimitExceeded(format!(
                "counting sort needs maxValue - minValue + 1 <= {COUNTING_MAX_RANGE}, got {}",
                self.value_span()
            )));
        }
        Ok(())
    }

    /// `max_value - min_value + 1`, 0 for an inverted range.
    pub fn value_span(&self) -> u64 {
        (i64::from(self.max_value) - i64::from(self.min_value) + 1).max(0) as u64
    }

    /// Number of array elements sorted over the whole run.
    pub fn total_elements(&self) -> u64 {
        let per_rep: u64 = self.sizes.iter().map(|&s| s as u64).sum();
        per_rep
            .saturating_mul(u64::from(self.repetitions))
            .saturating_mul(self.selected_algorithms().len() as u64)
    }

    /// Rough comparison count of the whole run: `n^2` per sort for the
    /// quadratic algorithms, `n * log2(n)` for the rest.
    pub fn estimated_work(&self) -> u64 {
        let algorithms = self.selected_algorithms();
        let per_rep: u64 = self
            .sizes
            .iter()
            .map(|&s| {
                let n = s as u64;
                algorithms
                    .iter()
                    .map(|k| {
                        if k.is_quadratic() {
                            n.saturating_mul(n)
                        } else {
                            n.saturating_mul(u64::from(n.max(2).ilog2()))
                        }
                    })
                    .fold(0u64, u64::saturating_add)
            })
            .fold(0u64, u64::saturating_add);
        per_rep.saturating_mul(u64::from(self.repetitions))
    }

    /// Multi-line summary printed before a CLI run.
    pub fn describe(&self) -> String {
        let sizes = self.sizes.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ");
        let algorithms = self
            .selected_algorithms()
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let seed = self.seed.map_or_else(|| "random".to_string(), |s| s.to_string());
        format!(
            "Benchmark configuration\n  sizes:       {sizes}\n  repetitions: {}\n  value range: [{}, {}]\n  seed:        {seed}\n  algorithms:  {algorithms}\n",
            self.repetitions, self.min_value, self.max_value
        )
    }
}

/// Parse `"100,1000,10000"`.
pub fn parse_sizes(s: &str) -> Result<Vec<usize>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<usize>()
                .map_err(|_| AlgoBenchError::BadRequest(format!("invalid size: {p}")))
        })
        .collect()
}

/// Deployment limits on a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    pub max_size: usize,
    pub max_repetitions: u32,
    pub max_total_elements: u64,
    /// Bound on [`BenchmarkConfig::estimated_work`].
    pub max_work: u64,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            max_size: 100_000,
            max_repetitions: 100,
            max_total_elements: 50_000_000,
            max_work: 10_000_000_000,
        }
    }
}

impl RunLimits {
    pub fn check(&self, cfg: &BenchmarkConfig) -> Result<()> {
        if let Some(&size) = cfg.sizes.iter().find(|&&s| s > self.max_size) {
            return Err(AlgoBenchError::LimitExceeded(format!(
                "size {size} exceeds max_size {}",
                self.max_size
            )));
        }
        if cfg.repetitions > self.max_repetitions {
            return Err(AlgoBenchError::LimitExceeded(format!(
                "repetitions {} exceeds max_repetitions {}",
                cfg.repetitions, self.max_repetitions
            )));
        }
        let total = cfg.total_elements();
        if total > self.max_total_elements {
            return Err(AlgoBenchError::LimitExceeded(format!(
                "run would sort {total} elements, max_total_elements is {}",
                self.max_total_elements
            )));
        }
        let work = cfg.estimated_work();
        if work > self.max_work {
            return Err(AlgoBenchError::LimitExceeded(format!(
                "run would take about {work} comparisons, max_work is {}",
                self.max_work
            )));
        }
        Ok(())
    }
}
