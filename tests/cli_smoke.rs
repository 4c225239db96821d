use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_qma").to_string()
}

fn run_in(home: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("QMA_DEBUG")
        .args(args)
        .output()
        .expect("run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn divergence_json_report() {
    let home = tempfile::tempdir().unwrap();
    let output = run_in(home.path(), &["--json", "divergence", "--k", "0.41", "--steps", "200"]);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let samples = v["samples"].as_array().expect("samples array");
    assert_eq!(v["total"].as_u64(), Some(samples.len() as u64));
    assert!(samples.len() <= 200);
    assert_eq!(samples[0].as_f64(), Some(0.0));
    assert_eq!(v["stop"], "exhausted");
    assert_eq!(v["k"].as_f64(), Some(0.41));
    assert_eq!(v["lanes"], serde_json::json!(["narrow", "wide"]));
}

#[test]
fn divergence_text_report() {
    let home = tempfile::tempdir().unwrap();
    let output = run_in(home.path(), &["divergence", "--steps", "150", "--seed", "3"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Evaluating narrow (f32) vs wide (f64) divergence"), "{text}");
    assert!(text.contains("Total steps simulated before threshold/conclusion: 150"), "{text}");
    assert!(text.contains("Divergence after 10 steps:"));
    assert!(text.contains("Divergence after 100 steps:"));
}

#[test]
fn explore_reports_optimum() {
    let home = tempfile::tempdir().unwrap();
    let output = run_in(home.path(), &["explore", "--points", "5", "--steps", "60", "--threads", "2"]);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let text = stdout(&output);
    assert_eq!(text.lines().filter(|l| l.starts_with("k=")).count(), 5);
    assert!(text.contains("Optimal Chaos Edge coupling strength found: k ="));
}

#[test]
fn explore_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("qma.toml");
    fs::write(&cfg, "[explore]\npoints = 3\nk_start = 0.5\nk_end = 0.7\n").unwrap();

    let output = run_in(
        dir.path(),
        &["--config", cfg.to_str().unwrap(), "--json", "explore"],
    );
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ks: Vec<f64> = v["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["k"].as_f64().unwrap())
        .collect();
    assert_eq!(ks, vec![0.5, 0.6, 0.7]);
    assert_eq!(v["escape_radius"].as_f64(), Some(5.0));
}

#[test]
fn default_config_is_picked_up_from_home() {
    let home = tempfile::tempdir().unwrap();
    let qma_dir = home.path().join(".qma");
    fs::create_dir_all(&qma_dir).unwrap();
    fs::write(qma_dir.join("config.toml"), "[divergence]\nsteps = 7\n").unwrap();

    let output = run_in(home.path(), &["--json", "divergence"]);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["steps"].as_u64(), Some(7));
}

#[test]
fn rejects_invalid_escape_radius() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("bad.toml");
    fs::write(&cfg, "[explore]\nescape_radius = -1.0\n").unwrap();

    let output = run_in(dir.path(), &["--config", cfg.to_str().unwrap(), "explore"]);
    assert!(!output.status.success(), "unexpected success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid Config"), "{stderr}");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let output = run_in(dir.path(), &["--config", missing.to_str().unwrap(), "divergence"]);
    assert!(!output.status.success());
}

#[test]
fn score_breakdown() {
    let home = tempfile::tempdir().unwrap();
    let output = run_in(home.path(), &["--json", "score", "--k", "2.0"]);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(v["escaped_at"].as_u64().is_some());
    assert!(v["score"].as_f64().unwrap() < 1e-3);
}
