//! HTTP mapping for `AlgoBenchError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use algobench_core::error::AlgoBenchError;

#[derive(Debug)]
pub struct ApiError(pub AlgoBenchError);

impl From<AlgoBenchError> for ApiError {
    fn from(e: AlgoBenchError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AlgoBenchError::BadRequest(_)
            | AlgoBenchError::LimitExceeded(_)
            | AlgoBenchError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            AlgoBenchError::Busy => StatusCode::TOO_MANY_REQUESTS,
            AlgoBenchError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            AlgoBenchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            tracing::debug!(error = %self.0, "request rejected");
        } else {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
            "status": "failed",
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_per_error() {
        let cases = [
            (AlgoBenchError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AlgoBenchError::LimitExceeded("x".into()), StatusCode::BAD_REQUEST),
            (AlgoBenchError::UnsupportedVersion, StatusCode::BAD_REQUEST),
            (AlgoBenchError::Busy, StatusCode::TOO_MANY_REQUESTS),
            (AlgoBenchError::Cancelled, StatusCode::SERVICE_UNAVAILABLE),
            (AlgoBenchError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).into_response().status(), status);
        }
    }
}
