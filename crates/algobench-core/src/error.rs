//! Shared error type across algobench crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed parameters.
    BadRequest,
    /// Parameters are valid but exceed the configured run limits.
    LimitExceeded,
    /// Too many benchmarks already running.
    Busy,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Run abandoned because the process is shutting down.
    Cancelled,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::LimitExceeded => "LIMIT_EXCEEDED",
            ClientCode::Busy => "BUSY",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Cancelled => "CANCELLED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AlgoBenchError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum AlgoBenchError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
    #[error("too many benchmarks running")]
    Busy,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("benchmark cancelled")]
    Cancelled,
    #[error("internal: {0}")]
    Internal(String),
}

impl AlgoBenchError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AlgoBenchError::BadRequest(_) => ClientCode::BadRequest,
            AlgoBenchError::LimitExceeded(_) => ClientCode::LimitExceeded,
            AlgoBenchError::Busy => ClientCode::Busy,
            AlgoBenchError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            AlgoBenchError::Cancelled => ClientCode::Cancelled,
            AlgoBenchError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Whether the caller, not the process, is at fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AlgoBenchError::Internal(_) | AlgoBenchError::Cancelled)
    }
}
