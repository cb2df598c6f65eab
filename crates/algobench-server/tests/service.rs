//! End-to-end tests against a real listener on 127.0.0.1.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use algobench_server::{app_state::AppState, config, server::Server};

struct Running {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<algobench_core::Result<()>>,
}

impl Running {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        let _ = self.stop.send(());
        tokio::time::timeout(Duration::from_secs(10), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked")
            .expect("server returned error");
    }
}

async fn start_on(addr: SocketAddr, cfg: config::AlgoBenchConfig) -> algobench_core::Result<Running> {
    start_with_state(addr, AppState::new(cfg)).await
}

async fn start_with_state(addr: SocketAddr, state: AppState) -> algobench_core::Result<Running> {
    let server = Server::bind(addr, state).await?;
    let addr = server.local_addr();
    let (stop, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(
        async move {
            let _ = rx.await;
        },
        Some(Duration::from_secs(5)),
    ));
    Ok(Running { addr, stop, handle })
}

async fn start() -> Running {
    start_on("127.0.0.1:0".parse().unwrap(), config::AlgoBenchConfig::default())
        .await
        .unwrap()
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok_quickly() {
    let srv = start().await;
    let c = client();

    let resp = tokio::time::timeout(Duration::from_secs(5), c.get(srv.url("/api/health")).send())
        .await
        .expect("health timed out")
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], "Algorithm Benchmark API");

    let resp = c.get(srv.url("/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let resp = c.get(srv.url("/readyz")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn metrics_payload_parses() {
    let srv = start().await;
    let c = client();

    // generate at least one counted request
    c.get(srv.url("/api/health")).send().await.unwrap();

    let resp = c.get(srv.url("/metrics")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let ctype = resp.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(ctype.starts_with("text/plain"));
    let body = resp.text().await.unwrap();
    assert!(!body.is_empty());

    let mut samples = 0;
    for line in body.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (series, value) = line.rsplit_once(' ').expect("sample line has a value");
        assert!(!series.is_empty(), "line={line}");
        value.parse::<f64>().unwrap_or_else(|_| panic!("bad sample value in: {line}"));
        samples += 1;
    }
    assert!(samples > 0);
    assert!(body.contains(
        "algobench_http_requests_total{method=\"GET\",route=\"/api/health\",status=\"200\"} 1"
    ));
    assert!(body.contains("algobench_process_uptime_seconds"));

    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn second_bind_on_same_port_fails() {
    let srv = start().await;
    let err = start_on(srv.addr, config::AlgoBenchConfig::default())
        .await
        .err()
        .expect("duplicate bind must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
    srv.shutdown().await;
}

#[tokio::test]
async fn shutdown_releases_port() {
    let srv = start().await;
    let addr = srv.addr;
    let c = client();
    assert_eq!(c.get(srv.url("/healthz")).send().await.unwrap().status(), 200);
    drop(c);
    srv.shutdown().await;

    let again = start_on(addr, config::AlgoBenchConfig::default())
        .await
        .expect("rebind after shutdown");
    let resp = client().get(again.url("/api/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    again.shutdown().await;
}

#[tokio::test]
async fn benchmark_completes_for_small_input() {
    let srv = start().await;
    let c = client();

    let resp = c
        .post(srv.url("/api/benchmark?repetitions=2&minValue=-5&maxValue=5&sizes=10,20&seed=1&_=123"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "completed");
    assert_eq!(body["config"]["repetitions"], 2);
    assert_eq!(body["config"]["sizes"], serde_json::json!([10, 20]));
    assert_eq!(body["results"].as_array().unwrap().len(), 7);
    assert!(body["executionTime"].as_str().unwrap().ends_with("ms"));
    assert!(body["consoleOutput"].as_str().unwrap().contains("Merge Sort"));
    assert!(body["timestamp"].as_str().is_some());

    let metrics = c.get(srv.url("/metrics")).send().await.unwrap().text().await.unwrap();
    assert!(metrics.contains("algobench_benchmark_runs_total{outcome=\"completed\"} 1"));
    assert!(metrics.contains("algobench_sort_duration_micros_count{algorithm=\"bubble\"} 4"));

    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn benchmark_rejects_bad_parameters() {
    let srv = start().await;
    let c = client();

    for query in [
        "sizes=10,abc",
        "minValue=10&maxValue=1",
        "repetitions=0",
        "repetitions=lots",
        "algorithms=bogo",
        "sizes=1000000",
        "minValue=0&maxValue=20000000",
        "sizes=100000&repetitions=71",
    ] {
        let resp = c.post(srv.url(&format!("/api/benchmark?{query}"))).send().await.unwrap();
        assert_eq!(resp.status(), 400, "query={query}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "failed", "query={query}");
        assert!(body["error"].is_string(), "query={query}");
    }

    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let srv = start().await;
    let c = client();
    let resp = c
        .get(srv.url("/api/health"))
        .header("Origin", "http://example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn readiness_flips_when_draining() {
    let state = AppState::new(config::AlgoBenchConfig::default());
    assert!(!state.is_draining());
    state.set_draining();
    assert!(state.is_draining());
    let body = state.metrics().render(&state.metrics_extra());
    assert!(body.contains("algobench_draining 1"));
    assert!(body.contains("algobench_benchmark_slots_available 2"));
}

#[tokio::test]
async fn run_slots_are_bounded() {
    let cfg = config::load_from_str("version: 1\nbenchmark:\n  max_concurrent_runs: 1\n").unwrap();
    let state = AppState::new(cfg);
    let permit = state.try_acquire_run().unwrap();
    let err = state.try_acquire_run().unwrap_err();
    assert_eq!(err.client_code().as_str(), "BUSY");
    drop(permit);
    assert!(state.try_acquire_run().is_ok());
}

fn local() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

#[tokio::test]
async fn readyz_reports_draining_over_http() {
    let state = AppState::new(config::AlgoBenchConfig::default());
    let srv = start_with_state(local(), state.clone()).await.unwrap();
    let c = client();

    assert_eq!(c.get(srv.url("/readyz")).send().await.unwrap().status(), 200);
    state.set_draining();
    let resp = c.get(srv.url("/readyz")).send().await.unwrap();
    assert_eq!(resp.status(), 503);
    assert_eq!(resp.text().await.unwrap(), "draining");
    // liveness is unaffected
    assert_eq!(c.get(srv.url("/healthz")).send().await.unwrap().status(), 200);

    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn benchmark_busy_when_slots_taken() {
    let cfg = config::load_from_str("version: 1\nbenchmark:\n  max_concurrent_runs: 1\n").unwrap();
    let state = AppState::new(cfg);
    let srv = start_with_state(local(), state.clone()).await.unwrap();
    let c = client();

    let permit = state.try_acquire_run().unwrap();
    let resp = c.post(srv.url("/api/benchmark?sizes=10&repetitions=1")).send().await.unwrap();
    assert_eq!(resp.status(), 429);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "BUSY");
    assert_eq!(body["status"], "failed");

    drop(permit);
    let resp = c.post(srv.url("/api/benchmark?sizes=10&repetitions=1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    drop(c);
    srv.shutdown().await;
}

#[tokio::test]
async fn shutdown_cancels_running_benchmark() {
    let state = AppState::new(config::AlgoBenchConfig::default());
    let srv = start_with_state(local(), state.clone()).await.unwrap();
    let url = srv.url("/api/benchmark?sizes=5000&repetitions=100&algorithms=bubble");

    // thousands of bubble sorts; far longer than the test waits
    let req = tokio::spawn(async move { client().post(url).send().await });
    tokio::time::sleep(Duration::from_millis(300)).await;

    let stopped = std::time::Instant::now();
    srv.shutdown().await;
    assert!(stopped.elapsed() < Duration::from_secs(5));

    let resp = req.await.unwrap().unwrap();
    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "CANCELLED");
    assert_eq!(state.metrics().benchmark_runs.get(&[("outcome", "CANCELLED")]), 1);
    assert!(state.try_acquire_run().is_ok());
}
