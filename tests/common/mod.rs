//! Common test utilities shared across integration tests.
//!
//! Every command runs against an isolated root so user configuration and
//! environment never leak into assertions.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;

/// Phases with a broken `next_phase` link, for permissive/strict checks.
pub const DANGLING_PHASES: &str = r#"
[[phases]]
id = "alpha"
title = "Alpha Wheel Setup"
summary = "Mount the wheels"
problem = "Robot does not move"
approach = "Attach motors"
tags = ["motors"]
next_phase = "omega"
created_at = "2024-01-01"
"#;

/// Scenario data: the only match for "PID" is tagged `robotics`.
pub const SCENARIO_PHASES: &str = r#"
[[phases]]
id = "p1"
title = "PID Control"
summary = "Closed loop steering"
problem = "Oscillation"
approach = "Tune gains"
tags = ["control"]
created_at = "2024-01-01"
"#;

pub const SCENARIO_RESOURCES: &str = r#"
[[resources]]
id = "r1"
title = "PID Explained"
description = "Video walkthrough"
url = "https://example.com/r1"
type = "youtube"
tags = ["robotics"]

[[resources]]
id = "r2"
title = "Arduino Guide"
description = "Board basics"
url = "https://example.com/r2"
type = "article"
tags = ["robotics"]
"#;

/// `roboline` with its root pinned to `root` and no config files.
pub fn roboline(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roboline").expect("binary builds");
    cmd.current_dir(root)
        .env("ROBOLINE_ROOT", root)
        .env("ROBOLINE_CONFIG", root.join("no-such-config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("ROBOLINE_CONTENT_DIR")
        .env_remove("ROBOLINE_SEARCH_THRESHOLD")
        .env_remove("ROBOLINE_SEARCH_LOCATION")
        .env_remove("ROBOLINE_BUILD_OUTPUT_DIR")
        .env_remove("ROBOLINE_SITE_TITLE");
    cmd
}

/// Run `--robot` with `args` and parse stdout as JSON.
pub fn robot_json(root: &Path, args: &[&str]) -> Value {
    let output = roboline(root)
        .arg("--robot")
        .args(args)
        .output()
        .expect("command runs");
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout is not JSON ({err}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Ids from a robot search response, in order.
pub fn result_ids(response: &Value) -> Vec<String> {
    response["data"]["results"]
        .as_array()
        .map(|results| {
            results
                .iter()
                .filter_map(|r| r["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
