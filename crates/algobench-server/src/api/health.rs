use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Algorithm Benchmark API";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP", service: SERVICE_NAME })
}
