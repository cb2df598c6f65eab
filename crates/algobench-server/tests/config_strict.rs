#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use algobench_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
benchmark:
  max_sise: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.benchmark.max_concurrent_runs, 2);
    assert_eq!(cfg.benchmark.limits().max_size, 100_000);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  shutdown_grace_ms: 0
benchmark:
  max_size: 5000
  max_repetitions: 20
  max_total_elements: 1000000
  max_concurrent_runs: 4
  max_work: 5000000
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert!(cfg.server.shutdown_grace().is_none());
    assert_eq!(cfg.benchmark.max_repetitions, 20);
    assert_eq!(cfg.benchmark.limits().max_work, 5_000_000);
}

#[test]
fn rejects_bad_values() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");

    let bad_listen = "version: 1\nserver:\n  listen: \"nope\"\n";
    assert!(config::load_from_str(bad_listen).is_err());

    let bad_runs = "version: 1\nbenchmark:\n  max_concurrent_runs: 0\n";
    assert!(config::load_from_str(bad_runs).is_err());

    let bad_total = "version: 1\nbenchmark:\n  max_size: 1000\n  max_total_elements: 10\n";
    assert!(config::load_from_str(bad_total).is_err());

    let bad_work = "version: 1\nbenchmark:\n  max_work: 0\n";
    assert!(config::load_from_str(bad_work).is_err());
}

#[test]
fn missing_explicit_file_fails() {
    let err = config::load(Some(std::path::Path::new("/definitely/not/here.yaml")))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
