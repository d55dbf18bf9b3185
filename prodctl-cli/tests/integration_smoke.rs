//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Product catalog maintenance tool"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Output as JSON"));
}

#[test]
fn test_get_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("get").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Product id"));
}

#[test]
fn test_find_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("find").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Substring to match"));
}

#[test]
fn test_add_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("List price"));
}

#[test]
fn test_update_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("update").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("New product name"));
}

#[test]
fn test_remove_help() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("remove").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Delete a product by id"));
}

#[test]
fn test_add_requires_price() {
    let mut cmd = Command::cargo_bin("prodctl").unwrap();
    cmd.arg("add").arg("--name").arg("Samsung S8");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--price"));
}
