//! Site build from the CLI through to the files on disk.

use std::fs;

use predicates::prelude::*;
use roboline::test_utils::fixtures::ContentFixture;
use tempfile::tempdir;

use super::common::{DANGLING_PHASES, SCENARIO_PHASES, SCENARIO_RESOURCES, robot_json, roboline};

#[test]
fn build_embedded_site_with_defaults() {
    let dir = tempdir().unwrap();

    roboline(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Site built"));

    let dist = dir.path().join("dist");
    let index = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("<title>RoboLine</title>"));
    assert!(index.contains("Basic Line Detection"));

    let detail = fs::read_to_string(dist.join("phases/phase-2/index.html")).unwrap();
    assert!(detail.contains("Previous Phase: Basic Line Detection"));
    assert!(detail.contains("Next Phase: Obstacle Detection &amp; Avoidance"));

    let not_found = fs::read_to_string(dist.join("404.html")).unwrap();
    assert!(not_found.contains("href=\"/phases/\""));

    let search: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dist.join("search.json")).unwrap()).unwrap();
    assert_eq!(search["resources"].as_array().unwrap().len(), 6);
}

#[test]
fn build_respects_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("roboline.toml"),
        "[site]\ntitle = \"LineBot\"\nbase_url = \"/docs/\"\n[build]\noutput_dir = \"public\"\n",
    )
    .unwrap();

    // Project config is only read when no explicit config is given.
    roboline(dir.path())
        .env_remove("ROBOLINE_CONFIG")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path())
        .arg("build")
        .assert()
        .success();

    let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(index.contains("<title>LineBot</title>"));
    assert!(index.contains("href=\"/docs/phases/\""));
}

#[test]
fn build_custom_content_with_clean() {
    let fixture = ContentFixture::new();
    fixture.create_content(SCENARIO_PHASES, SCENARIO_RESOURCES);
    fixture.create_file("site/stale.html", "old");
    let out = fixture.root.join("site");

    let report = robot_json(
        &fixture.root,
        &["--content", "content", "build", "--out", "site", "--clean"],
    );
    assert_eq!(report["status"], "ok");
    // home, phases, one detail, resources plus four type pages, two tags,
    // about, contact, 404
    assert_eq!(report["data"]["pages"], 13);
    assert!(!out.join("stale.html").exists());

    let articles = fs::read_to_string(out.join("resources/article/index.html")).unwrap();
    assert!(articles.contains("id=\"r2\""));
    assert!(!articles.contains("id=\"r1\""));
    assert!(articles.contains("Showing 1 resource<"));

    let tag_page = fs::read_to_string(out.join("tags/robotics/index.html")).unwrap();
    assert!(tag_page.contains("2 matching items"));
    assert!(tag_page.contains("id=\"r1\""));
}

#[test]
fn dangling_next_phase_renders_without_link() {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("phases.toml"), DANGLING_PHASES).unwrap();

    roboline(dir.path())
        .args(["--content", "content", "build"])
        .assert()
        .success();

    let detail = fs::read_to_string(dir.path().join("dist/phases/alpha/index.html")).unwrap();
    assert!(!detail.contains("Next Phase"));
}

#[test]
fn strict_links_env_rejects_dangling_content() {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("phases.toml"), DANGLING_PHASES).unwrap();

    roboline(dir.path())
        .env("ROBOLINE_CONTENT_STRICT_LINKS", "true")
        .args(["--content", "content", "build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("omega"));
}
