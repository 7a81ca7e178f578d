//! Synthetic CLI checks: help, version, argument validation

use predicates::prelude::*;

mod common;
use common::sheetcast_cmd;

#[test]
fn test_help_lists_subcommands() {
    sheetcast_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("columns"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("broadcast"));
}

#[test]
fn test_version_flag() {
    sheetcast_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetcast"));
}

#[test]
fn test_preview_requires_to_column() {
    sheetcast_cmd()
        .args(["preview", "staff.xlsx", "--field", "Phone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn test_send_file_requires_user() {
    sheetcast_cmd()
        .args(["send-file", "report.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user"));
}

#[test]
fn test_no_subcommand_shows_usage() {
    sheetcast_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
