//! Top-level facade crate for algobench.
//!
//! Re-exports the core library and the server so users can depend on a single crate.

pub mod core {
    pub use algobench_core::*;
}

pub mod server {
    pub use algobench_server::*;
}
