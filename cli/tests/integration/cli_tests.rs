//! Integration tests for the CLI surface: help, version, argument parsing.

use predicates::prelude::*;

use crate::syncbuild;

#[test]
fn test_cli_help_flag_shows_commands() {
    syncbuild()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("profile"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    syncbuild()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("syncbuild"));
}

#[test]
fn test_run_help_documents_env_fallbacks() {
    syncbuild()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKSPACE"))
        .stdout(predicate::str::contains("BUILD_SCRIPT"))
        .stdout(predicate::str::contains("GIT_BRANCH"));
}

#[test]
fn test_unknown_flag_exits_one() {
    syncbuild()
        .arg("--no-such-flag")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn test_non_numeric_timeout_exits_one() {
    syncbuild().args(["run", "--timeout", "soon"]).assert().code(1);
}

#[test]
fn test_invalid_timeout_from_environment_exits_one() {
    syncbuild()
        .env("BUILD_TIMEOUT_SECS", "abc")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn test_subcommand_help_still_exits_zero() {
    syncbuild().args(["profile", "--help"]).assert().success();
}
