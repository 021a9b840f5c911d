// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading Ditz issues from disk.
//!
//! A Ditz project keeps one YAML document per issue, named `issue-<id>.yaml`,
//! in the directory named by `issue_dir` in the project's `.ditz-config`
//! (usually `bugs/`). Each document carries a Ruby type tag on its header:
//!
//! ```yaml
//! --- !ditz.rubyforge.org,2008-03-06/issue
//! title: Crash on start
//! status: :in_progress
//! disposition:
//! id: 5b2a1c7e9f0d...
//! log_events:
//! - - 2008-06-16 10:39:28.385966 Z
//!   - Jane Doe <jane@example.com>
//!   - commented
//!   - 1h fixed the bug
//! ```
//!
//! Files that cannot be read or parsed are skipped with a warning and
//! reported in [`LoadOutcome::failures`].

use dh_core::{Disposition, Issue, LogEntry, Status};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::timestamp::parse_log_timestamp;

pub const DITZ_CONFIG_FILE_NAME: &str = ".ditz-config";
const DEFAULT_ISSUE_DIR: &str = "bugs";
const ISSUE_FILE_PREFIX: &str = "issue-";
const ISSUE_FILE_SUFFIX: &str = ".yaml";

// Ruby type tag after a document marker, e.g. `--- !ditz.rubyforge.org,2008-03-06/issue`.
static DOCUMENT_TAG: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?m)^(---)[ \t]+![^\s]*") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// An issue file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Issues that loaded, and files that did not.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub issues: Vec<Issue>,
    pub failures: Vec<LoadFailure>,
}

#[derive(Debug, Deserialize)]
struct DitzConfig {
    #[serde(default = "default_issue_dir")]
    issue_dir: String,
}

fn default_issue_dir() -> String {
    DEFAULT_ISSUE_DIR.to_string()
}

/// One `log_events` element: `[timestamp, author, action, comment]`.
type RawEvent = (String, Option<String>, String, Option<String>);

#[derive(Debug, Deserialize)]
struct IssueDocument {
    id: String,
    title: String,
    status: String,
    #[serde(default)]
    disposition: Option<String>,
    #[serde(default)]
    log_events: Vec<RawEvent>,
}

/// Load every issue reachable from `paths`.
///
/// # Errors
///
/// Fails if a path does not exist or if no issue could be loaded at all.
pub fn load(paths: &[PathBuf]) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();
    let mut seen = HashSet::new();

    for path in paths {
        if !path.exists() {
            return Err(Error::PathNotFound(path.display().to_string()));
        }
        let files = match issue_files(path) {
            Ok(files) => files,
            Err(Error::PathNotFound(p)) => return Err(Error::PathNotFound(p)),
            Err(error) => {
                tracing::warn!("skipping {}: {}", path.display(), error);
                outcome.failures.push(LoadFailure {
                    path: path.clone(),
                    error,
                });
                continue;
            }
        };

        for file in files {
            // `./bugs/x` and `bugs/x` name the same file.
            let key = fs::canonicalize(&file).unwrap_or_else(|_| file.clone());
            if !seen.insert(key) {
                continue;
            }
            match load_issue_file(&file) {
                Ok(issue) => {
                    tracing::debug!(
                        "loaded {} ({} log entries)",
                        issue.short_id(),
                        issue.log.len()
                    );
                    outcome.issues.push(issue);
                }
                Err(error) => {
                    tracing::warn!("skipping {}: {}", file.display(), error);
                    outcome.failures.push(LoadFailure { path: file, error });
                }
            }
        }
    }

    if outcome.issues.is_empty() {
        let joined = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::NoIssues(joined));
    }
    Ok(outcome)
}

/// Issue files for one command-line path, in file-name order.
///
/// A file is returned as-is. A directory is resolved to its issue directory
/// first (see [`resolve_issue_dir`]).
pub fn issue_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(Error::PathNotFound(path.display().to_string()));
    }

    let dir = resolve_issue_dir(path)?;
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_issue_file_name(p))
        .collect();
    files.sort();
    tracing::debug!("found {} issue files in {}", files.len(), dir.display());
    Ok(files)
}

/// Find the directory holding issue files for a project directory.
///
/// Uses `issue_dir` from `.ditz-config` when present. Otherwise the directory
/// itself, or its `bugs/` subdirectory if only that contains issues.
pub fn resolve_issue_dir(dir: &Path) -> Result<PathBuf> {
    let config_path = dir.join(DITZ_CONFIG_FILE_NAME);
    if config_path.is_file() {
        let content = fs::read_to_string(&config_path)?;
        let config: DitzConfig =
            serde_yaml::from_str(&strip_tags(&content)).map_err(|e| Error::InvalidConfig {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;
        let issue_dir = dir.join(&config.issue_dir);
        if !issue_dir.is_dir() {
            return Err(Error::PathNotFound(issue_dir.display().to_string()));
        }
        return Ok(issue_dir);
    }

    let fallback = dir.join(DEFAULT_ISSUE_DIR);
    if !contains_issue_files(dir) && fallback.is_dir() {
        return Ok(fallback);
    }
    Ok(dir.to_path_buf())
}

fn contains_issue_files(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .any(|entry| is_issue_file_name(&entry.path()))
        })
        .unwrap_or(false)
}

fn is_issue_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.starts_with(ISSUE_FILE_PREFIX) && name.ends_with(ISSUE_FILE_SUFFIX)
        })
}

/// Read and parse a single issue file.
pub fn load_issue_file(path: &Path) -> Result<Issue> {
    let content = fs::read_to_string(path)?;
    parse_issue(&content, path)
}

/// Parse the YAML text of an issue; `path` is only used in messages.
pub fn parse_issue(content: &str, path: &Path) -> Result<Issue> {
    let invalid = |reason: String| Error::InvalidIssueFile {
        path: path.display().to_string(),
        reason,
    };

    let doc: IssueDocument =
        serde_yaml::from_str(&strip_tags(content)).map_err(|e| invalid(e.to_string()))?;

    let status: Status = doc
        .status
        .parse()
        .map_err(|e: dh_core::Error| invalid(e.to_string()))?;
    let disposition = match doc.disposition.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(d) => Some(
            d.parse::<Disposition>()
                .map_err(|e| invalid(e.to_string()))?,
        ),
    };

    let mut log = Vec::with_capacity(doc.log_events.len());
    for (timestamp, author, action, comment) in doc.log_events {
        let Some(timestamp) = parse_log_timestamp(&timestamp) else {
            tracing::warn!(
                "{}: skipping log entry with invalid timestamp '{}'",
                path.display(),
                timestamp
            );
            continue;
        };
        let mut entry = LogEntry::new(timestamp, action, comment.unwrap_or_default());
        if let Some(author) = author.filter(|a| !a.is_empty()) {
            entry = entry.with_author(author);
        }
        log.push(entry);
    }

    Ok(Issue {
        id: doc.id,
        title: doc.title,
        status,
        disposition,
        log,
    })
}

/// Drop Ruby type tags from document headers so plain serde structs apply.
fn strip_tags(content: &str) -> String {
    DOCUMENT_TAG.replace_all(content, "$1").into_owned()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
