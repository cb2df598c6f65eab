//! Lightweight in-process metrics and HTTP request instrumentation.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler in
//! Prometheus text format.

pub mod http;
pub mod metrics;

pub use metrics::ServiceMetrics;
