//! Per-request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Routes are labelled by their matched pattern so unknown paths collapse into
/// a single series.
pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();
    let metrics = state.metrics();

    metrics.http_in_flight.inc(&[]);
    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();
    metrics.http_in_flight.dec(&[]);

    let status = resp.status();
    metrics.http_requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    metrics.http_duration.observe(&[("route", route.as_str())], elapsed);

    if status.is_server_error() {
        tracing::warn!(%method, %route, status = status.as_u16(), "request failed");
    }
    resp
}
