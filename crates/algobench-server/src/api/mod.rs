//! Public `/api` endpoints.

pub mod benchmark;
pub mod error;
pub mod health;

pub use benchmark::run_benchmark;
pub use error::ApiError;
pub use health::health;
