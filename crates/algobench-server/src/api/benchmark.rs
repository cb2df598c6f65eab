//! `POST /api/benchmark`
//!
//! Query parameters (all optional): `repetitions`, `minValue`, `maxValue`,
//! `sizes` (comma separated), `seed`, `algorithms` (comma separated).
//! The run itself happens on the blocking pool; at most
//! `benchmark.max_concurrent_runs` run at once and extra requests get 429.
//! Unrecognised parameters are ignored. A run still going when shutdown
//! begins stops at its next sort and answers 503.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use algobench_core::bench::{parse_sizes, BenchmarkConfig, BenchmarkRunner};
use algobench_core::error::AlgoBenchError;
use algobench_core::sort::AlgorithmKind;

use crate::api::ApiError;
use crate::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkQuery {
    pub repetitions: Option<u32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub sizes: Option<String>,
    pub seed: Option<u64>,
    pub algorithms: Option<String>,
}

impl BenchmarkQuery {
    pub fn into_config(self) -> Result<BenchmarkConfig, AlgoBenchError> {
        let mut cfg = BenchmarkConfig::default();
        if let Some(r) = self.repetitions {
            cfg.repetitions = r;
        }
        if let Some(v) = self.min_value {
            cfg.min_value = v;
        }
        if let Some(v) = self.max_value {
            cfg.max_value = v;
        }
        if let Some(s) = self.sizes.as_deref() {
            cfg.sizes = parse_sizes(s)?;
        }
        if let Some(a) = self.algorithms.as_deref() {
            cfg.algorithms = AlgorithmKind::parse_list(a)?;
        }
        cfg.seed = self.seed;
        cfg.validate()?;
        Ok(cfg)
    }
}

pub async fn run_benchmark(
    State(state): State<AppState>,
    query: Result<Query<BenchmarkQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let metrics = state.metrics();
    let result = execute(&state, query).await;
    let outcome = match &result {
        Ok(_) => "completed",
        Err(e) => e.0.client_code().as_str(),
    };
    metrics.benchmark_runs.inc(&[("outcome", outcome)]);
    result
}

async fn execute(
    state: &AppState,
    query: Result<Query<BenchmarkQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) =
        query.map_err(|e| AlgoBenchError::BadRequest(e.body_text()))?;
    let cfg = query.into_config()?;
    state.limits().check(&cfg)?;

    let permit = state.try_acquire_run()?;
    let metrics = state.metrics();
    let started = Instant::now();

    let run_cfg = cfg.clone();
    let report = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        BenchmarkRunner::new(run_cfg, &*metrics)?.run()
    })
    .await
    .map_err(|e| AlgoBenchError::Internal(format!("benchmark task failed: {e}")))??;

    let elapsed_ms = started.elapsed().as_millis();
    tracing::info!(
        sizes = ?cfg.sizes,
        repetitions = cfg.repetitions,
        elapsed_ms = elapsed_ms as u64,
        "benchmark request served"
    );

    Ok(Json(json!({
        "config": {
            "repetitions": cfg.repetitions,
            "minValue": cfg.min_value,
            "maxValue": cfg.max_value,
            "sizes": cfg.sizes,
            "seed": cfg.seed,
            "algorithms": cfg.selected_algorithms(),
        },
        "results": report.results,
        "executionTime": format!("{elapsed_ms}ms"),
        "consoleOutput": report.render_table(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "status": "completed",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_defaults() {
        let cfg = BenchmarkQuery::default().into_config().unwrap();
        assert_eq!(cfg, BenchmarkConfig::default());
    }

    #[test]
    fn query_overrides() {
        let q = BenchmarkQuery {
            repetitions: Some(2),
            min_value: Some(-10),
            max_value: Some(10),
            sizes: Some("5,6".into()),
            seed: Some(9),
            algorithms: Some("heap".into()),
        };
        let cfg = q.into_config().unwrap();
        assert_eq!(cfg.sizes, vec![5, 6]);
        assert_eq!(cfg.repetitions, 2);
        assert_eq!((cfg.min_value, cfg.max_value), (-10, 10));
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.algorithms, vec![AlgorithmKind::Heap]);
    }

    #[test]
    fn bad_query_values() {
        let q = BenchmarkQuery { sizes: Some("10,x".into()), ..Default::default() };
        assert!(q.into_config().is_err());

        let q = BenchmarkQuery { min_value: Some(5), max_value: Some(1), ..Default::default() };
        assert!(q.into_config().is_err());

        let q = BenchmarkQuery { algorithms: Some("bogo".into()), ..Default::default() };
        assert!(q.into_config().is_err());
    }
}
