//! Content validation, listing, contact, and config commands.

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use super::common::{DANGLING_PHASES, robot_json, roboline};

#[test]
fn check_passes_on_embedded_content() {
    let dir = tempdir().unwrap();
    let response = robot_json(dir.path(), &["check", "--strict"]);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["data"]["source"], "embedded");
    assert_eq!(response["data"]["phases"], 3);
    assert!(response["data"]["dangling_links"].as_array().unwrap().is_empty());
}

#[test]
fn check_strict_fails_on_dangling_link() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("content")).unwrap();
    fs::write(dir.path().join("content/phases.toml"), DANGLING_PHASES).unwrap();

    roboline(dir.path())
        .args(["--content", "content", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha links to missing next phase omega"));

    roboline(dir.path())
        .args(["--content", "content", "check", "--strict"])
        .assert()
        .failure();
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("content")).unwrap();
    let doubled = format!("{DANGLING_PHASES}\n{DANGLING_PHASES}");
    fs::write(dir.path().join("content/phases.toml"), doubled).unwrap();

    let output = roboline(dir.path())
        .args(["--robot", "--content", "content", "list", "phases"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let error: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(error["code"], "invalid_content");
}

#[test]
fn list_resources_filters_by_tag() {
    let dir = tempdir().unwrap();
    let response = robot_json(dir.path(), &["list", "resources", "--tag", "motors"]);
    let entries = response["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "motor-control-library");
    assert_eq!(entries[0]["type"], "github");
}

#[test]
fn contact_submission_returns_reference() {
    let dir = tempdir().unwrap();
    let response = robot_json(
        dir.path(),
        &[
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Kit",
            "--message",
            "Which sensors?",
        ],
    );
    assert_eq!(response["status"], "ok");
    assert_eq!(response["data"]["reference"].as_str().unwrap().len(), 36);
}

#[test]
fn contact_rejects_bad_email() {
    let dir = tempdir().unwrap();
    roboline(dir.path())
        .args([
            "contact", "--name", "Ada", "--email", "nope", "--subject", "Kit", "--message", "Hi",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email"));
}

#[test]
fn config_reflects_env_overrides() {
    let dir = tempdir().unwrap();
    roboline(dir.path())
        .env("ROBOLINE_SEARCH_THRESHOLD", "0.6")
        .env("ROBOLINE_SITE_TITLE", "LineBot")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold = 0.6"))
        .stdout(predicate::str::contains("title = \"LineBot\""));
}

#[test]
fn config_rejects_bad_env_value() {
    let dir = tempdir().unwrap();
    let output = roboline(dir.path())
        .env("ROBOLINE_SEARCH_DISTANCE", "far")
        .args(["--robot", "config"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let error: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(error["code"], "config");
}
