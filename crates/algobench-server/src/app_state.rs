//! Shared application state for the algobench service.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use algobench_core::bench::RunLimits;
use algobench_core::error::{AlgoBenchError, Result};

use crate::config::AlgoBenchConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServiceMetrics>,
    run_slots: Arc<Semaphore>,
}

struct AppStateInner {
    cfg: AlgoBenchConfig,
    limits: RunLimits,
}

impl AppState {
    /// Build application state from a validated config.
    pub fn new(cfg: AlgoBenchConfig) -> Self {
        let limits = cfg.benchmark.limits();
        let run_slots = Arc::new(Semaphore::new(cfg.benchmark.max_concurrent_runs));
        Self {
            inner: Arc::new(AppStateInner { cfg, limits }),
            metrics: Arc::new(ServiceMetrics::default()),
            run_slots,
        }
    }

    pub fn cfg(&self) -> &AlgoBenchConfig {
        &self.inner.cfg
    }

    pub fn limits(&self) -> RunLimits {
        self.inner.limits
    }

    pub fn metrics(&self) -> Arc<ServiceMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        if !self.metrics.is_draining() {
            tracing::info!("draining: readiness now reports 503");
        }
        self.metrics.set_draining();
    }

    /// Claim a benchmark slot without waiting. The slot is released when the
    /// permit drops.
    pub fn try_acquire_run(&self) -> Result<OwnedSemaphorePermit> {
        Arc::clone(&self.run_slots)
            .try_acquire_owned()
            .map_err(|_| AlgoBenchError::Busy)
    }

    /// Gauges computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![(
            "algobench_benchmark_slots_available",
            self.run_slots.available_permits() as u64,
        )]
    }
}
