//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_usage() {
    Command::cargo_bin("sms-forge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("SMS_FORGE_ENCODING"));
}

#[test]
fn test_template_argument_expands() {
    Command::cargo_bin("sms-forge")
        .unwrap()
        .arg("(1-2)")
        .env("SMS_FORGE_ENCODING", "ASCII")
        .env("SMS_FORGE_MODE", "sequential")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total variants: 2"));
}

#[test]
fn test_malformed_template_fails() {
    Command::cargo_bin("sms-forge")
        .unwrap()
        .arg("no positions")
        .env("SMS_FORGE_ENCODING", "ASCII")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template problem"));
}
