// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dh-core operations.

use thiserror::Error;

/// All possible errors that can occur in dh-core operations.
///
/// Parsing a comment that carries no work-log annotation is never an error;
/// these variants cover invalid configuration and malformed structural input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid status: '{0}'\n  hint: valid statuses are: unstarted, in_progress, paused, closed")]
    InvalidStatus(String),

    #[error("invalid disposition: '{0}'\n  hint: valid dispositions are: fixed, wontfix, reorg")]
    InvalidDisposition(String),

    #[error("invalid unit: '{0}'\n  hint: valid units are: minute, hour, day, week")]
    InvalidUnit(String),

    #[error("invalid status change: '{0}'")]
    InvalidStatusChange(String),

    #[error("invalid anchor: '{0}'\n  hint: valid anchors are: start, anywhere")]
    InvalidAnchor(String),

    #[error("invalid source: '{0}'\n  hint: valid sources are: comments, status")]
    InvalidSource(String),

    #[error("invalid time range: {after} is not before {before}")]
    InvalidRange { after: String, before: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A specialized Result type for dh-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
