use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/sample_network.txt")
        .canonicalize()
        .expect("fixture network present")
}

fn route_command(from: &str, to: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("roadnet-cli");
    cmd.env("RUST_LOG", "error")
        .arg("route")
        .arg("--input")
        .arg(fixture_path())
        .arg("--from")
        .arg(from)
        .arg("--to")
        .arg(to);
    cmd
}

#[test]
fn text_format_prints_every_criterion() {
    route_command("Amberfield", "Cedar Point")
        .arg("--priority")
        .arg("(T,D)")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DISTANCE: Amberfield -> Brookhaven -> Cedar Point | D=20, T=10, C=4",
        ))
        .stdout(predicate::str::contains(
            "TIME: Amberfield -> Cedar Point | D=25, T=1, C=1",
        ))
        .stdout(predicate::str::contains(
            "COMPROMISE: Amberfield -> Cedar Point | D=25, T=1, C=1",
        ));
}

#[test]
fn basic_format_outputs_compromise_path() {
    let mut cmd = route_command("Amberfield", "Eastwick");
    cmd.arg("--format").arg("basic");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("+ Amberfield"))
        .stdout(predicate::str::contains("| Dunmore"))
        .stdout(predicate::str::contains("- Eastwick"))
        .stdout(predicate::str::contains("via distance (D=32, T=18, C=18)"));
}

#[test]
fn json_format_serialises_plan() {
    let output = route_command("Amberfield", "Eastwick")
        .arg("--format")
        .arg("json")
        .arg("--priority")
        .arg("(C)")
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(value["compromise"], "cost");
    assert_eq!(value["start"]["name"], "Amberfield");
    assert_eq!(value["goal"]["name"], "Eastwick");
    assert_eq!(value["routes"][2]["totals"]["cost"], 8);
}

#[test]
fn unknown_location_error_is_friendly() {
    route_command("Amberfeld", "Eastwick")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown location 'Amberfeld'"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn route_not_found_error_suggests_next_steps() {
    route_command("Amberfield", "Farrow Isle")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between Amberfield and Farrow Isle.",
        ));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = cargo_bin_cmd!("roadnet-cli");
    cmd.env("RUST_LOG", "error")
        .arg("route")
        .arg("--input")
        .arg(dir.path().join("missing.txt"))
        .arg("--from")
        .arg("A")
        .arg("--to")
        .arg("B");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}
