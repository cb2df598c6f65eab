//! Operational endpoints for probes and scrapers.
//!
//! - `/healthz` : liveness, plain `ok`
//! - `/readyz`  : readiness, 503 `draining` once shutdown has begun so load
//!   balancers stop routing new benchmark runs here
//! - `/metrics` : Prometheus text format (request, benchmark and sort series)
//!
//! The JSON `/api/health` for API clients lives in `api::health`.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render(&state.metrics_extra());
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
