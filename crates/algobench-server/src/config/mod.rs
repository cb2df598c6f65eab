//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use algobench_core::error::{AlgoBenchError, Result};

pub use schema::{AlgoBenchConfig, BenchmarkSection, ServerSection};

/// Picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "algobench.yaml";

/// Explicit paths must exist; without one, `algobench.yaml` is used when
/// present and built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<AlgoBenchConfig> {
    match path {
        Some(p) => load_from_file(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load_from_file(default)
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                Ok(AlgoBenchConfig::default())
            }
        }
    }
}

pub fn load_from_file(path: &Path) -> Result<AlgoBenchConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        AlgoBenchError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    let cfg = load_from_str(&s)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<AlgoBenchConfig> {
    let cfg: AlgoBenchConfig = serde_yaml::from_str(s)
        .map_err(|e| AlgoBenchError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
