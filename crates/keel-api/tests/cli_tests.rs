//! Tests for the command-line surface and startup error paths.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Clean Architecture starter server"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_a_user_error() {
    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.arg("--bogus");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.args(["--quiet", "-v"]);

    cmd.assert().failure().code(2);
}

#[test]
fn test_missing_config_file_exits_with_4() {
    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.args(["--config", "/definitely/not/here/keel.toml"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_malformed_config_file_exits_with_4() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not [valid toml").unwrap();

    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.arg("--config").arg(&path);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("hint:"));
}
