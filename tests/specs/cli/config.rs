// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `.ditz-hours.toml`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

fn estimate_project() -> Project {
    let project = Project::new();
    project.issue(
        "e5e5e5e5",
        "Estimate",
        "in_progress",
        &[
            ("2024-03-04 09:00:00", "commented", "1d planning"),
            ("2024-03-05 09:00:00", "commented", "1pd review"),
        ],
    );
    project
}

#[test]
fn config_units_and_hours_per_day() {
    let project = estimate_project();
    project.write(
        ".ditz-hours.toml",
        "hours_per_day = 7.5\n\n[units]\npd = \"day\"\n",
    );
    project
        .dh()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 15h00' Total"));
}

#[test]
fn config_flag_overrides_file() {
    let project = estimate_project();
    project.write(".ditz-hours.toml", "hours_per_day = 7.5\n");
    project
        .dh()
        .args(["report", "--hours-per-day", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  4h00' Total"));
}

#[test]
fn config_unknown_key_fails() {
    let project = estimate_project();
    project.write(".ditz-hours.toml", "hour_per_day = 7.5\n");
    project
        .dh()
        .arg("report")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn config_non_positive_hours_fails() {
    let project = estimate_project();
    project
        .dh()
        .args(["report", "--hours-per-day", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: "));
}
