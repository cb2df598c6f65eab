//! Axum router wiring.
//!
//! `/api/*` carries the public API, `/healthz`, `/readyz` and `/metrics` the
//! operational endpoints. Every route is CORS-open, traced, and counted.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/benchmark", post(api::run_benchmark))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(state.clone(), obs::http::track))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
