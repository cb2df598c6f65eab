//! Runner behaviour through the public API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use algobench_core::bench::{BenchmarkConfig, BenchmarkRunner, NoopObserver, RunLimits};
use algobench_core::sort::AlgorithmKind;

#[test]
fn seeded_run_covers_every_algorithm_and_size() {
    let cfg = BenchmarkConfig {
        sizes: vec![16, 64, 256],
        repetitions: 2,
        min_value: -1000,
        max_value: 1000,
        seed: Some(2024),
        algorithms: vec![],
    };
    RunLimits::default().check(&cfg).unwrap();

    let report = BenchmarkRunner::new(cfg, &NoopObserver).unwrap().run().unwrap();
    let kinds: Vec<AlgorithmKind> = report.results.iter().map(|r| r.algorithm).collect();
    assert_eq!(kinds, AlgorithmKind::ALL.to_vec());

    let table = report.render_table();
    assert_eq!(table.lines().count(), 1 + AlgorithmKind::ALL.len());
    for kind in AlgorithmKind::ALL {
        assert!(table.contains(kind.display_name()), "missing {kind}");
    }
}

#[test]
fn report_serializes_camel_case() {
    let cfg = BenchmarkConfig {
        sizes: vec![8],
        repetitions: 1,
        seed: Some(1),
        algorithms: vec![AlgorithmKind::Counting],
        ..Default::default()
    };
    let report = BenchmarkRunner::new(cfg, &NoopObserver).unwrap().run().unwrap();
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["results"][0]["algorithm"], "counting");
    assert_eq!(v["results"][0]["name"], "Counting Sort");
    assert!(v["results"][0]["timings"][0]["averageMs"].is_number());
    assert!(v.get("elapsed").is_none());
}
