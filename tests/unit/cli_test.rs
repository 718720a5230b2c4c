//! Tests for the stacks CLI

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn stacks() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("stacks"));
    cmd.env_remove("STACKS_CONFIG").env("NO_COLOR", "1");
    cmd
}

fn write_sample_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    stacks()
        .args(["--config", path.to_str().unwrap(), "init"])
        .assert()
        .success();
    path
}

#[test]
fn test_version() {
    stacks()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stacks"));
}

#[test]
fn test_help() {
    stacks()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patrons who owe fees cannot check out books"));
}

#[test]
fn test_no_args_shows_info() {
    stacks().assert().success().stdout(predicate::str::contains("stacks v"));
}

#[test]
fn test_version_json() {
    stacks()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_demo_checks_out_both_books() {
    stacks()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("check out: 123456 / 1234"))
        .stdout(predicate::str::contains("check out: 789012 / 5678"))
        .stdout(predicate::str::contains("Transactions: 2"))
        .stdout(predicate::str::contains("Error:").not());
}

#[test]
fn test_demo_json() {
    let output = stacks().args(["--json", "demo"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["steps"].as_array().unwrap().len(), 2);
    assert_eq!(json["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(json["transactions"][0]["activity"], "check out");
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Sample Book 1"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());
    fs::write(&path, "# custom\n").unwrap();

    stacks()
        .args(["--config", path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# custom\n");

    stacks()
        .args(["--config", path.to_str().unwrap(), "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[[books]]"));
}

#[test]
fn test_books_lists_catalog() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    stacks()
        .args(["--config", path.to_str().unwrap(), "books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("123456 - Sample Book 1"))
        .stdout(predicate::str::contains("789012 - Sample Book 2"));
}

#[test]
fn test_books_genre_filter() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    stacks()
        .args(["--config", path.to_str().unwrap(), "books", "--genre", "non_fiction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("789012 - Sample Book 2"))
        .stdout(predicate::str::contains("123456").not());

    stacks()
        .args(["--config", path.to_str().unwrap(), "books", "-g", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("123456 - Sample Book 1"))
        .stdout(predicate::str::contains("789012").not());
}

#[test]
fn test_books_invalid_genre_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    stacks()
        .args(["--config", path.to_str().unwrap(), "books", "--genre", "poetry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid genre: poetry"));
}

#[test]
fn test_books_does_not_log_registrations() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    stacks()
        .env_remove("RUST_LOG")
        .args(["--config", path.to_str().unwrap(), "books"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Registered").not());
}

#[test]
fn test_books_without_config_is_empty() {
    let temp = TempDir::new().unwrap();
    stacks()
        .args(["--config", temp.path().join("none.toml").to_str().unwrap(), "books"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books registered."));
}

#[test]
fn test_patrons_owing_filter() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[patrons]]
name = "Paid Up"
card_number = "1"

[[patrons]]
name = "Late Larry"
card_number = "2"
owed_fees = 15
"#,
    )
    .unwrap();

    stacks()
        .args(["--config", path.to_str().unwrap(), "patrons", "--owing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Late Larry"))
        .stdout(predicate::str::contains("Paid Up").not());
}

#[test]
fn test_checkout_refused_for_owing_patron() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[books]]
isbn = "789012"
title = "Sample Book 2"
author = "Author 2"
copyright_year = 2010
genre = "non_fiction"

[[patrons]]
name = "User 1"
card_number = "1234"
owed_fees = 10
"#,
    )
    .unwrap();

    stacks()
        .args(["--config", path.to_str().unwrap(), "checkout", "789012", "1234"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("owes 10 in fees"));
}

#[test]
fn test_checkout_unknown_book() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    stacks()
        .args(["--config", path.to_str().unwrap(), "checkout", "000000", "1234"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("book not found in library: 000000"));
}

#[test]
fn test_checkin_json() {
    let temp = TempDir::new().unwrap();
    let path = write_sample_config(temp.path());

    stacks()
        .args(["--json", "--config", path.to_str().unwrap(), "checkin", "123456", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"activity\": \"check in\""));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is not toml = = =").unwrap();

    stacks()
        .args(["--config", path.to_str().unwrap(), "books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
