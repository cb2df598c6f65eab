use std::fmt::Write;
use std::time::Duration;

use serde::Serialize;

use crate::sort::AlgorithmKind;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeResult {
    pub size: usize,
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl SizeResult {
    pub fn from_samples(size: usize, runs: &[Duration]) -> Self {
        if runs.is_empty() {
            return Self { size, average_ms: 0.0, min_ms: 0.0, max_ms: 0.0 };
        }
        let ms = |d: &Duration| d.as_secs_f64() * 1000.0;
        let total: f64 = runs.iter().map(ms).sum();
        Self {
            size,
            average_ms: total / runs.len() as f64,
            min_ms: runs.iter().map(ms).fold(f64::INFINITY, f64::min),
            max_ms: runs.iter().map(ms).fold(0.0, f64::max),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    pub algorithm: AlgorithmKind,
    pub name: &'static str,
    pub timings: Vec<SizeResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    pub results: Vec<AlgorithmResult>,
    #[serde(skip)]
    pub elapsed: Duration,
}

const NAME_WIDTH: usize = 16;
const COL_WIDTH: usize = 12;

impl BenchmarkReport {
    /// Fixed-width table of average milliseconds, one row per algorithm.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let sizes: Vec<usize> = self
            .results
            .first()
            .map(|r| r.timings.iter().map(|t| t.size).collect())
            .unwrap_or_default();

        let _ = write!(out, "{:<w$}", "Size", w = NAME_WIDTH);
        for s in &sizes {
            let _ = write!(out, "{:>w$}", s, w = COL_WIDTH);
        }
        out.push('\n');

        for r in &self.results {
            let _ = write!(out, "{:<w$}", r.name, w = NAME_WIDTH);
            for t in &r.timings {
                let _ = write!(out, "{:>w$.3}", t.average_ms, w = COL_WIDTH);
            }
            out.push('\n');
        }
        out
    }
}
