//! Integration tests for the `jsonv` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the binary end
//! to end: tree printing, round-trip file output, parse diagnostics, and
//! argument handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use jsonv_core::Value;
use predicates::prelude::*;

/// Helper: path to the tree.json fixture.
fn tree_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tree.json")
}

fn jsonv() -> Command {
    Command::cargo_bin("jsonv").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn prints_tree_with_depth_markers() {
    let output_path = "/tmp/jsonv-test-print-output.json";
    let _ = std::fs::remove_file(output_path);

    jsonv()
        .args(["--input", tree_json_path(), "--output", output_path])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\n"))
        .stdout(predicate::str::contains("-\"a\"\n"))
        .stdout(predicate::str::contains("-2.5\n"))
        .stdout(predicate::str::contains("--7\n"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn output_file_round_trips_the_input() {
    let output_path = "/tmp/jsonv-test-roundtrip-output.json";
    let _ = std::fs::remove_file(output_path);

    jsonv()
        .args(["-i", tree_json_path(), "-o", output_path])
        .assert()
        .success();

    let input = std::fs::read_to_string(tree_json_path()).unwrap();
    let output = std::fs::read_to_string(output_path).expect("output file must exist");
    assert_eq!(
        Value::parse(&output).unwrap(),
        Value::parse(&input).unwrap(),
        "round-tripped document must be structurally equal to the input"
    );

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn input_with_utf8_bom_is_accepted() {
    let input_path = "/tmp/jsonv-test-bom-input.json";
    let output_path = "/tmp/jsonv-test-bom-output.json";
    let mut bytes = vec![0xef, 0xbb, 0xbf];
    bytes.extend_from_slice(br#"{"node": 5}"#);
    std::fs::write(input_path, bytes).unwrap();

    jsonv()
        .args(["-i", input_path, "-o", output_path])
        .assert()
        .success()
        .stdout(predicate::str::contains("5\n"));

    let _ = std::fs::remove_file(input_path);
    let _ = std::fs::remove_file(output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_fails_with_parse_diagnostic() {
    let input_path = "/tmp/jsonv-test-malformed-input.json";
    std::fs::write(input_path, "[1, 2,]").unwrap();

    jsonv()
        .args(["-i", input_path, "-o", "/tmp/jsonv-test-malformed-output.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error at line"));

    let _ = std::fs::remove_file(input_path);
}

#[test]
fn document_without_node_field_fails() {
    let input_path = "/tmp/jsonv-test-nonode-input.json";
    std::fs::write(input_path, r#"{"other": 1}"#).unwrap();

    jsonv()
        .args(["-i", input_path, "-o", "/tmp/jsonv-test-nonode-output.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node"));

    let _ = std::fs::remove_file(input_path);
}

#[test]
fn nonexistent_input_fails() {
    jsonv()
        .args(["-i", "/tmp/jsonv-test-does-not-exist.json", "-o", "/tmp/out.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't open"));
}

#[test]
fn missing_arguments_fail() {
    jsonv().assert().failure();
    jsonv().args(["-i", tree_json_path()]).assert().failure();
}
