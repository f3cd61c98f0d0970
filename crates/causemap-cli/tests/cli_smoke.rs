//! Smoke tests for the causemap command surface.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use clap::Parser;
use serde_json::Value;

use causemap_cli::{run, Cli, Outcome};
use causemap_core::errors::{CausemapError, CausemapErrorCode};

const CHAIN: &str = r#"{
    "nodes": [
        {"id": "A", "title": "A", "tags": ["x"]},
        {"id": "B", "title": "B"},
        {"id": "C", "title": "C"}
    ],
    "edges": [
        {"id": "e1", "sourceId": "A", "targetId": "B", "strength": 7},
        {"id": "e2", "sourceId": "B", "targetId": "C"}
    ]
}"#;

/// Serializes tests that touch HOME and CAUSEMAP_* variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

struct Fixture {
    dir: tempfile::TempDir,
    graph: PathBuf,
    _env: MutexGuard<'static, ()>,
}

/// Writes `json` to a fresh tempdir and points HOME at it, so neither a
/// developer's user config nor their environment can reach the command.
fn fixture(json: &str) -> Fixture {
    let env = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    for (key, _) in std::env::vars() {
        if key.starts_with("CAUSEMAP_") && key != "CAUSEMAP_LOG" {
            std::env::remove_var(key);
        }
    }
    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", dir.path());
    let graph = dir.path().join("map.json");
    std::fs::write(&graph, json).unwrap();
    Fixture {
        dir,
        graph,
        _env: env,
    }
}

fn run_args(fx: &Fixture, args: &[&str]) -> Result<Outcome, CausemapError> {
    let root = fx.dir.path().to_str().unwrap();
    let mut argv = vec!["causemap", "--config-root", root];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv).unwrap())
}

#[test]
fn analyze_prints_result_json() {
    let fx = fixture(CHAIN);
    let file = fx.graph.to_str().unwrap();
    let Outcome::Printed(text) = run_args(&fx, &["analyze", file]).unwrap() else {
        panic!("expected printed output");
    };
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tailNodes"], serde_json::json!(["A"]));
    assert_eq!(value["clusters"]["A"], serde_json::json!("tag:x"));
}

#[test]
fn analyze_honours_clustering_flag() {
    let fx = fixture(CHAIN);
    let file = fx.graph.to_str().unwrap();
    let Outcome::Printed(text) =
        run_args(&fx, &["analyze", file, "--clustering", "none"]).unwrap()
    else {
        panic!("expected printed output");
    };
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["clusters"]["A"], serde_json::json!("cluster:all"));
}

#[test]
fn project_config_is_picked_up() {
    let fx = fixture(CHAIN);
    std::fs::write(fx.dir.path().join("causemap.toml"), "[analysis]\ndriver_limit = 1\n").unwrap();
    let file = fx.graph.to_str().unwrap();
    let Outcome::Printed(text) = run_args(&fx, &["analyze", file]).unwrap() else {
        panic!("expected printed output");
    };
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["drivers"].as_array().unwrap().len(), 1);
}

#[test]
fn strict_flag_rejects_out_of_range_strength() {
    let fx = fixture(CHAIN);
    let file = fx.graph.to_str().unwrap();
    let err = run_args(&fx, &["analyze", file, "--strict"]).unwrap_err();
    assert_eq!(err.error_code(), "GRAPH_INVALID");
}

#[test]
fn path_prints_ids_or_reports_no_path() {
    let fx = fixture(CHAIN);
    let file = fx.graph.to_str().unwrap();
    assert_eq!(
        run_args(&fx, &["path", file, "A", "C"]).unwrap(),
        Outcome::Printed(r#"["A","B","C"]"#.to_string())
    );
    assert_eq!(
        run_args(&fx, &["path", file, "C", "A"]).unwrap(),
        Outcome::NoPath {
            from: "C".into(),
            to: "A".into()
        }
    );
}

#[test]
fn validate_reports_counts() {
    let fx = fixture(CHAIN);
    let file = fx.graph.to_str().unwrap();
    assert_eq!(
        run_args(&fx, &["validate", file]).unwrap(),
        Outcome::Printed("ok: 3 nodes, 2 edges".to_string())
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let fx = fixture(CHAIN);
    let missing = fx.dir.path().join("nope.json");
    let err = run_args(&fx, &["validate", missing.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.error_code(), "IO_ERROR");
}

#[test]
fn user_config_under_home_is_the_only_one_read() {
    let fx = fixture(CHAIN);
    let user_dir = fx.dir.path().join(".causemap");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[analysis]\nclustering = \"none\"\n").unwrap();
    let file = fx.graph.to_str().unwrap();
    let Outcome::Printed(text) = run_args(&fx, &["analyze", file]).unwrap() else {
        panic!("expected printed output");
    };
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["clusters"]["A"], serde_json::json!("cluster:all"));
}

#[test]
fn unknown_clustering_is_a_usage_error() {
    assert!(Cli::try_parse_from(["causemap", "analyze", "map.json", "--clustering", "k-means"]).is_err());
}
