//! algobench server library entry.
//!
//! Wires config, shared state, metrics, the public API, and the operational
//! endpoints into an axum service. Consumed by the `algobench` binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
