use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn dcalc(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dcalc").unwrap();
    cmd.env("HOME", home.path())
        .env("DCALC_CONFIG", home.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_calc_text() {
    let home = tempfile::tempdir().unwrap();
    dcalc(&home)
        .args(["calc", "5/22/25, 9:54:05 AM", "5/22/25, 1:06:07 PM"])
        .assert()
        .success()
        .stdout("The duration is: 3 hours, 12 minutes, 2 seconds\n");
}

#[test]
fn test_calc_bad_input_fails_with_message() {
    let home = tempfile::tempdir().unwrap();
    dcalc(&home)
        .args(["calc", "not a date", "5/22/25, 1:06:07 PM"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: time data 'not a date' does not match format",
        ));
}

#[test]
fn test_calc_json() {
    let home = tempfile::tempdir().unwrap();
    let assert = dcalc(&home)
        .args([
            "calc",
            "1/2/25, 12:00:00 AM",
            "1/1/25, 12:00:00 AM",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["days"], 1);
    assert_eq!(json["total_seconds"], 86_400);
    assert_eq!(json["start"], "2025-01-01T00:00:00");
    assert_eq!(json["message"], "The duration is: 1 day");
}

#[test]
fn test_calc_uses_configured_format() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let assert = dcalc(&home)
        .args(["calc", "1/1/25, 12:00:00 AM", "1/1/25, 12:00:00 AM"])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["message"], "The duration is: 0 seconds");
}

#[test]
fn test_interactive_session() {
    let home = tempfile::tempdir().unwrap();
    dcalc(&home)
        .write_stdin("5/22/25, 9:54:05 AM\n5/22/25, 1:06:07 PM\nyes\nbad\nworse\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Welcome to the Date Duration Calculator!",
        ))
        .stdout(predicate::str::contains(
            "The duration is: 3 hours, 12 minutes, 2 seconds",
        ))
        .stdout(predicate::str::contains("time data 'bad'"))
        .stdout(predicate::str::ends_with(
            "Thank you for using the calculator!\n",
        ));
}

#[test]
fn test_banner_can_be_disabled() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("config.toml"), "[prompt]\nbanner = false\n").unwrap();

    dcalc(&home)
        .arg("interactive")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("config.toml"), "[output\n").unwrap();

    dcalc(&home)
        .args(["calc", "1/1/25, 12:00:00 AM", "1/1/25, 12:00:01 AM"])
        .assert()
        .success()
        .stdout("The duration is: 1 second\n")
        .stderr(predicate::str::contains("Ignoring config file"));
}

#[test]
fn test_config_get() {
    let home = tempfile::tempdir().unwrap();
    dcalc(&home)
        .args(["config", "get", "prompt.banner"])
        .assert()
        .success()
        .stdout("true\n");
}
