//! End-to-end tests driving the built `montepi` binary.

use std::process::{Command, Output};

fn montepi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_montepi"))
        .args(args)
        .output()
        .expect("failed to run montepi")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_is_stable() {
    let first = montepi(&["--help"]);
    let second = montepi(&["--help"]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(stdout(&first).contains("NUMBER"));
}

#[test]
fn test_version() {
    let output = montepi(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(&format!("version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_estimate_ten() {
    let output = montepi(&["10"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Final pi estimate from 10 attempts"));
}

#[test]
fn test_seeded_runs_match() {
    let a = montepi(&["--seed", "42", "1000"]);
    let b = montepi(&["--seed", "42", "1000"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_json_output() {
    let output = montepi(&["--json", "--seed", "1", "500"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("\"attempts\": 500"));
    assert!(out.contains("\"seed\": 1"));
}

#[test]
fn test_unseeded_json_has_no_seed() {
    let output = montepi(&["--json", "1000"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("\"seed\": null"), "unexpected output: {}", out);
}

#[test]
fn test_negative_fails_with_count_error() {
    let output = montepi(&["-5"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("got -5"));
}

#[test]
fn test_rust_log_controls_logging() {
    let debug = Command::new(env!("CARGO_BIN_EXE_montepi"))
        .env("RUST_LOG", "debug")
        .args(["--seed", "3", "500"])
        .output()
        .expect("failed to run montepi");
    assert!(debug.status.success());
    assert!(String::from_utf8_lossy(&debug.stderr).contains("inside="));

    let silent = Command::new(env!("CARGO_BIN_EXE_montepi"))
        .env("RUST_LOG", "off")
        .args(["--verbose", "500"])
        .output()
        .expect("failed to run montepi");
    assert!(silent.status.success());
    assert!(silent.stderr.is_empty());
}

#[test]
fn test_non_integer_fails() {
    let output = montepi(&["abc"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not an integer"));
}

#[test]
fn test_zero_fails() {
    assert!(!montepi(&["0"]).status.success());
}

#[test]
fn test_missing_number_fails() {
    assert!(!montepi(&[]).status.success());
}
