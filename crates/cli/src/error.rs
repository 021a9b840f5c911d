// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the dhrs library.
///
/// Only structural failures end up here. A comment without a work-log
/// annotation, or an issue file that fails to parse, is skipped instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("path not found: {0}\n  hint: pass a Ditz project directory or issue-*.yaml files")]
    PathNotFound(String),

    #[error("no issues loaded from {0}\n  hint: issue files are named issue-*.yaml")]
    NoIssues(String),

    #[error("invalid timestamp: '{value}'\n  hint: use YYYY-MM-DD, YYYY-MM-DD HH or YYYY-MM-DD HH:MM")]
    InvalidTimestamp { value: String },

    #[error("invalid issue file {path}: {reason}")]
    InvalidIssueFile { path: String, reason: String },

    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error(transparent)]
    Core(#[from] dh_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dhrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
