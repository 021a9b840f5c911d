// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `ditz-hours entries`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn entries_lists_records_oldest_first() {
    let project = sample_project();
    project
        .dh()
        .arg("entries")
        .assert()
        .success()
        .stdout(
            "2024-12-30 17:00   3h30' 5b2a1 traced the crash\n\
             2024-12-31 11:00   1h00' 5b2a1 fixed the bug\n\
             2025-01-06 14:00     45' 9c4d2 README\n",
        );
}

#[test]
fn entries_respects_issue_and_range_filters() {
    let project = sample_project();
    project
        .dh()
        .args(["entries", "-i", "5b2a", "-a", "2024-12-31"])
        .assert()
        .success()
        .stdout("2024-12-31 11:00   1h00' 5b2a1 fixed the bug\n");
}

#[test]
fn entries_json() {
    let project = sample_project();
    let output = project
        .dh()
        .args(["entries", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["issue_id"], "5b2a1c7e9f0d");
    assert_eq!(records[0]["hours"], 3.5);
    assert_eq!(records[0]["timestamp"], "2024-12-30T17:00:00Z");
    assert_eq!(records[2]["description"], "README");
    assert_eq!(value["total"], 5.25);
}

#[test]
fn entries_status_source() {
    let project = Project::new();
    project.issue(
        "a1b2c3d4",
        "Refactor",
        "closed",
        &[
            ("2024-05-06 10:00:00", "changed status from unstarted to in_progress", ""),
            ("2024-05-06 10:45:00", "closed issue with disposition fixed", ""),
        ],
    );
    project
        .dh()
        .args(["entries", "-s", "status"])
        .assert()
        .success()
        .stdout("2024-05-06 10:00     45' a1b2c in_progress until fixed\n");
}
