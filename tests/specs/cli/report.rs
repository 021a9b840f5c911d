// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `ditz-hours report`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

// =============================================================================
// Text output
// =============================================================================

#[test]
fn report_totals_per_issue() {
    let project = sample_project();
    project
        .dh()
        .arg("report")
        .assert()
        .success()
        .stdout(
            "  4h30' 5b2a1 Crash on start\n\
             \x20   45' 9c4d2 Write docs\n\
             \x20 5h15' Total\n",
        );
}

#[test]
fn report_weekly_crosses_iso_year() {
    let project = sample_project();
    let output = project
        .dh()
        .args(["report", "-g", "weekly"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    similar_asserts::assert_eq!(
        stdout,
        "  4h30' 5b2a1 Crash on start\n\
         \x20   45' 9c4d2 Write docs\n\
         \x20 5h15' Total\n\
         \n\
         Daily:\n\
         2024-12-30   3h30'\n\
         2024-12-31   1h00'\n\
         2025-01-06     45'\n\
         \n\
         Weekly:\n\
         2025-W01     4h30'\n\
         2025-W02       45'\n"
    );
}

#[test]
fn report_daily_has_no_weekly_section() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "--granularity", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily:"))
        .stdout(predicate::str::contains("Weekly:").not());
}

// =============================================================================
// Filters
// =============================================================================

#[parameterized(
    date_only = { "2024-12-31" },
    date_and_hour = { "2024-12-31 00" },
    underscore = { "2024-12-31_00:00" },
    rfc3339 = { "2024-12-31T00:00:00Z" },
)]
fn report_after_bound(after: &str) {
    let project = sample_project();
    project
        .dh()
        .args(["report", "-a", after])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1h00' 5b2a1 Crash on start"))
        .stdout(predicate::str::contains("  1h45' Total"));
}

#[test]
fn report_before_bound_is_exclusive() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "-b", "2024-12-31 11:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  3h30' Total"));
}

#[test]
fn report_issue_prefix_filter() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "-i", "9c4"])
        .assert()
        .success()
        .stdout("    45' 9c4d2 Write docs\n    45' Total\n");
}

#[test]
fn report_unknown_issue_warns_and_succeeds() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "-i", "ffff"])
        .assert()
        .success()
        .stdout("No work logged.\n")
        .stderr(predicate::str::contains("warning: no issue matches 'ffff'"));
}

#[test]
fn report_empty_range_succeeds() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "-a", "2030-01-01"])
        .assert()
        .success()
        .stdout("No work logged.\n");
}

#[test]
fn report_inverted_range_fails() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "-a", "2025-01-01", "-b", "2024-01-01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: "));
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn report_explicit_project_path() {
    let project = sample_project();
    dh().arg("report")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  5h15' Total"));
}

#[test]
fn report_explicit_issue_file() {
    let project = sample_project();
    dh().arg("report")
        .arg(project.path().join("bugs/issue-9c4d2e8f7a6b.yaml"))
        .assert()
        .success()
        .stdout("    45' 9c4d2 Write docs\n    45' Total\n");
}

#[test]
fn report_skips_corrupt_issue_file() {
    let project = sample_project();
    project.write("bugs/issue-broken.yaml", "--- [unterminated");
    project
        .dh()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("  5h15' Total"))
        .stderr(predicate::str::contains("skipped 1 unreadable issue file"));
}

#[test]
fn report_missing_path_fails() {
    let project = sample_project();
    project
        .dh()
        .args(["report", "no-such-dir"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: path not found"));
}

#[test]
fn report_directory_without_issues_fails() {
    let temp = TempDir::new().unwrap();
    dh().arg("report")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no issues loaded"));
}

// =============================================================================
// Sources and conventions
// =============================================================================

#[test]
fn report_status_source() {
    let project = Project::new();
    project.issue(
        "a1b2c3d4",
        "Refactor",
        "paused",
        &[
            ("2024-05-06 10:00:00", "changed status from unstarted to in_progress", ""),
            ("2024-05-06 10:30:00", "commented", "5h not counted"),
            ("2024-05-06 11:30:00", "changed status from in_progress to paused", ""),
        ],
    );
    project
        .dh()
        .args(["report", "-s", "status"])
        .assert()
        .success()
        .stdout("  1h30' a1b2c Refactor\n  1h30' Total\n");
}

#[test]
fn report_hours_per_day_flag() {
    let project = Project::new();
    project.issue(
        "d4y5d4y5",
        "Migration",
        "in_progress",
        &[("2024-05-06 10:00:00", "commented", "1d moved tables")],
    );
    project
        .dh()
        .args(["report", "--hours-per-day", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  6h00' Total"));
}

#[test]
fn report_start_anchor_flag() {
    let project = Project::new();
    project.issue(
        "a0a0a0a0",
        "Anchors",
        "in_progress",
        &[
            ("2024-05-06 10:00:00", "commented", "spent 2h reading"),
            ("2024-05-06 11:00:00", "commented", "1h writing"),
        ],
    );
    project
        .dh()
        .args(["report", "--anchor", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1h00' Total"));
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn report_json() {
    let project = sample_project();
    let output = project
        .dh()
        .args(["report", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], "comments");
    assert_eq!(value["total"], 5.25);
    assert_eq!(value["issues"]["5b2a1c7e9f0d"]["hours"], 4.5);
    assert_eq!(value["days"]["2024-12-30"], 3.5);
    assert_eq!(value["weeks"]["2025-W01"], 4.5);
    assert_eq!(value["weeks"]["2025-W02"], 0.75);
    assert!(value.get("range").is_none());
}

#[test]
fn report_json_includes_range_when_bounded() {
    let project = sample_project();
    let output = project
        .dh()
        .args(["report", "-o", "json", "-a", "2025-01-01"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["range"]["after"].is_string());
    assert_eq!(value["total"], 0.75);
}
