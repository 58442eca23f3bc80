//! Smoke tests -- verify the binary runs and key modules load.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn test_cli_help() {
    Command::cargo_bin("apivault")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Typed catalog and test harness",
        ));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("apivault")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("apivault"));
}

#[test]
fn test_list_shows_builtin_catalog() {
    Command::cargo_bin("apivault")
        .unwrap()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("messaging-send-sms"));
}

#[test]
fn test_list_filters_by_category() {
    Command::cargo_bin("apivault")
        .unwrap()
        .args(["list", "--category", "billing-communications"])
        .assert()
        .success()
        .stdout(predicates::str::contains("billing-send-receipt"))
        .stdout(predicates::str::contains("messaging-send-sms").not());
}

#[test]
fn test_show_unknown_endpoint_fails() {
    Command::cargo_bin("apivault")
        .unwrap()
        .args(["show", "no-such-endpoint"])
        .assert()
        .failure();
}

#[test]
fn test_categories_subcommand() {
    Command::cargo_bin("apivault")
        .unwrap()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicates::str::contains("billing-communications"));
}
