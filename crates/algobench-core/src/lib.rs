//! algobench core: sorting algorithms, input generation, the benchmark runner,
//! and the error surface shared by the server and the CLI.
//!
//! This crate carries no transport or async runtime dependencies, so the same
//! runner backs both the HTTP endpoint and the `algobench run` command.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad parameters surface as `AlgoBenchError` so a malformed request can never
//! take the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod bench;
pub mod error;
pub mod input;
pub mod sort;

/// Shared result type.
pub use error::{AlgoBenchError, Result};
