//! Search, tags, and lookups through the CLI.

use predicates::prelude::*;
use roboline::test_utils::fixtures::ContentFixture;
use tempfile::tempdir;

use super::common::{SCENARIO_PHASES, SCENARIO_RESOURCES, result_ids, robot_json, roboline};

fn scenario_root() -> ContentFixture {
    let fixture = ContentFixture::new();
    fixture.create_content(SCENARIO_PHASES, SCENARIO_RESOURCES);
    fixture
}

#[test]
fn query_and_tag_narrow_to_one_resource() {
    let fixture = scenario_root();
    let response = robot_json(
        &fixture.root,
        &["--content", "content", "search", "PID", "--tag", "robotics"],
    );
    assert_eq!(response["status"], "ok");
    assert_eq!(result_ids(&response), vec!["r1"]);
    assert_eq!(response["data"]["results"][0]["kind"], "resource");
}

#[test]
fn query_alone_finds_both_kinds() {
    let fixture = scenario_root();
    let response = robot_json(&fixture.root, &["--content", "content", "search", "PID"]);
    let mut ids = result_ids(&response);
    ids.sort();
    assert_eq!(ids, vec!["p1", "r1"]);
}

#[test]
fn blank_search_lists_everything_in_order() {
    let fixture = scenario_root();
    let response = robot_json(&fixture.root, &["--content", "content", "search"]);
    assert_eq!(result_ids(&response), vec!["p1", "r1", "r2"]);
    assert_eq!(response["data"]["count"], 3);
}

#[test]
fn unknown_tag_is_reported_as_warning() {
    let fixture = scenario_root();
    let response = robot_json(
        &fixture.root,
        &["--content", "content", "search", "--tag", "robotics", "--tag", "lidar"],
    );
    assert_eq!(response["status"], "warning");
    assert_eq!(response["warnings"][0], "unknown tag: lidar");
    assert_eq!(result_ids(&response), vec!["r1", "r2"]);
}

#[test]
fn repeated_tag_keeps_the_filter() {
    let dir = tempdir().unwrap();
    let once = robot_json(dir.path(), &["search", "-t", "sensors"]);
    let twice = robot_json(dir.path(), &["search", "-t", "sensors", "-t", "sensors"]);
    assert_eq!(result_ids(&once), vec!["phase-1", "sensor-calibration"]);
    assert_eq!(result_ids(&twice), result_ids(&once));
    assert_eq!(twice["data"]["tags"], serde_json::json!(["sensors"]));
}

#[test]
fn oversized_search_location_is_a_config_error() {
    let dir = tempdir().unwrap();
    let pattern = "line following robot with obstacle avoidance";
    let output = roboline(dir.path())
        .env("ROBOLINE_SEARCH_LOCATION", usize::MAX.to_string())
        .args(["--robot", "search", pattern])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(78));
    let error: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(error["code"], "config");
    assert!(error["message"].as_str().unwrap().contains("search.location"));
}

#[test]
fn type_filter_applies_after_controller() {
    let dir = tempdir().unwrap();
    let response = robot_json(dir.path(), &["search", "--type", "youtube"]);
    assert_eq!(
        result_ids(&response),
        vec!["pid-control-explained", "obstacle-avoidance-algorithms"]
    );

    let response = robot_json(dir.path(), &["search", "--kind", "phase", "-n", "2"]);
    assert_eq!(result_ids(&response), vec!["phase-1", "phase-2"]);
}

#[test]
fn no_match_is_not_an_error() {
    let dir = tempdir().unwrap();
    roboline(dir.path())
        .args(["search", "xyzxyz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results for 'xyzxyz-no-match'"));
}

#[test]
fn plain_format_prints_tab_rows() {
    let dir = tempdir().unwrap();
    roboline(dir.path())
        .args(["--format", "plain", "search", "--tag", "sensors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0000\tphase\tphase-1\tBasic Line Detection"));
}

#[test]
fn tags_report_counts() {
    let dir = tempdir().unwrap();
    let response = robot_json(dir.path(), &["tags"]);
    let tags = response["data"].as_array().unwrap();
    assert_eq!(tags[0]["tag"], "sensors");
    assert_eq!(tags[0]["phases"], 1);
    assert_eq!(tags[0]["resources"], 1);
}

#[test]
fn show_unknown_phase_fails_with_code() {
    let dir = tempdir().unwrap();
    let output = roboline(dir.path())
        .args(["--robot", "show", "phase", "phase-9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let error: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(error["error"], true);
    assert_eq!(error["code"], "not_found");
    assert!(error["message"].as_str().unwrap().contains("phase-9"));
    assert!(error["hint"].as_str().unwrap().contains("roboline list phases"));
}

#[test]
fn show_unknown_resource_prints_hint_on_stderr() {
    let dir = tempdir().unwrap();
    roboline(dir.path())
        .args(["show", "resource", "nope"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("resource not found: nope"))
        .stderr(predicate::str::contains("roboline list resources"));
}

#[test]
fn show_phase_human_includes_navigation() {
    let dir = tempdir().unwrap();
    roboline(dir.path())
        .args(["show", "phase", "phase-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase 2: PID Control Implementation"))
        .stdout(predicate::str::contains("phase-1"))
        .stdout(predicate::str::contains("phase-3"));
}
