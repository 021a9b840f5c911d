// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn dh() -> Command {
    cargo_bin_cmd!("ditz-hours")
}

/// A Ditz project on disk: `.ditz-config` pointing at `bugs/`.
pub struct Project {
    pub temp: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".ditz-config"),
            "--- !ditz.rubyforge.org,2008-03-06/config \nname: Jane Doe\nemail: jane@example.com\nissue_dir: bugs\n",
        )
        .unwrap();
        fs::create_dir(temp.path().join("bugs")).unwrap();
        Project { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `bugs/issue-<id>.yaml` with `(timestamp, action, comment)` events.
    pub fn issue(&self, id: &str, title: &str, status: &str, events: &[(&str, &str, &str)]) -> PathBuf {
        let mut yaml = format!(
            "--- !ditz.rubyforge.org,2008-03-06/issue \n\
             title: {title}\n\
             desc: \"\"\n\
             type: :bugfix\n\
             component: ditz-hours\n\
             release:\n\
             reporter: Jane Doe <jane@example.com>\n\
             status: :{status}\n\
             disposition:\n\
             creation_time: 2024-01-01 08:00:00.000000 Z\n\
             references: []\n\
             \n\
             id: {id}\n\
             log_events:\n"
        );
        for (at, action, comment) in events {
            yaml.push_str(&format!(
                "- - {at}.000000 Z\n  - Jane Doe <jane@example.com>\n  - {action}\n  - {comment:?}\n"
            ));
        }
        let path = self.path().join("bugs").join(format!("issue-{id}.yaml"));
        fs::write(&path, yaml).unwrap();
        path
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).unwrap();
    }

    pub fn dh(&self) -> Command {
        let mut cmd = dh();
        cmd.current_dir(self.path()).env_remove("RUST_LOG").env_remove("DH_TIMINGS");
        cmd
    }
}

/// Two issues with work logged across an ISO week boundary.
pub fn sample_project() -> Project {
    let project = Project::new();
    project.issue(
        "5b2a1c7e9f0d",
        "Crash on start",
        "in_progress",
        &[
            ("2024-12-30 09:00:00", "created", ""),
            ("2024-12-30 09:05:00", "changed status from unstarted to in_progress", ""),
            ("2024-12-30 17:00:00", "commented", "3.5h traced the crash"),
            ("2024-12-31 11:00:00", "commented", "1h fixed the bug"),
            ("2025-01-06 10:00:00", "commented", "no hours here"),
        ],
    );
    project.issue(
        "9c4d2e8f7a6b",
        "Write docs",
        "closed",
        &[
            ("2025-01-06 14:00:00", "commented", "45m: README"),
            ("2025-01-06 15:00:00", "closed issue with disposition fixed", ""),
        ],
    );
    project
}
