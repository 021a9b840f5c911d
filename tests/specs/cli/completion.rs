// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = dh().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[test]
fn completion_bash_contains_commands() {
    dh().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ditz-hours"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("entries"));
}

#[test]
fn completion_without_shell_shows_help() {
    dh().arg("completion")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn completion_invalid_shell_fails() {
    dh().args(["completion", "tcsh"]).assert().failure();
}
