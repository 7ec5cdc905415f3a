use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::hd;

#[test]
fn test_wrong_argument_count_prints_usage() {
    hd().assert().failure().stderr(contains("Usage"));

    hd().args(["hotels", "5432"])
        .assert()
        .failure()
        .stderr(contains("<USER>"));
}

#[test]
fn test_version_flag() {
    hd().arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unreachable_server_is_fatal() {
    let home = tempfile::tempdir().unwrap();

    // nothing listens on port 1
    hd().env("HOME", home.path())
        .args(["hotels", "1", "alice"])
        .write_stdin("17\n")
        .assert()
        .code(1)
        .stdout(contains("Connecting to database..."))
        .stdout(contains("postgresql://localhost:1/hotels"))
        .stdout(contains("MAIN MENU").not())
        .stderr(contains("Unable to Connect to Database"));
}

#[test]
fn test_bad_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.conf");
    fs::write(&path, "logging: [oops\n").unwrap();

    hd().args(["hotels", "5432", "alice", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(contains("Configuration error"));
}
