// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for Ditz projects.
//!
//! This module contains the read-only snapshot types produced by the loader:
//! Issue, Status, Disposition, LogEntry, and the StatusChange parsed from a
//! log entry's action text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an issue.
///
/// Ditz stores statuses as Ruby symbols (`:in_progress`); the leading colon
/// is accepted and ignored when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started. Initial state for new issues.
    Unstarted,
    /// Currently being worked on.
    InProgress,
    /// Work started but suspended.
    Paused,
    /// Closed with a disposition.
    Closed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unstarted => "unstarted",
            Status::InProgress => "in_progress",
            Status::Paused => "paused",
            Status::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match strip_symbol(s).to_lowercase().as_str() {
            "unstarted" => Ok(Status::Unstarted),
            "in_progress" => Ok(Status::InProgress),
            "paused" => Ok(Status::Paused),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// How a closed issue was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Fixed,
    #[serde(rename = "wontfix")]
    WontFix,
    Reorg,
}

impl Disposition {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Fixed => "fixed",
            Disposition::WontFix => "wontfix",
            Disposition::Reorg => "reorg",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Disposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match strip_symbol(s).to_lowercase().as_str() {
            "fixed" => Ok(Disposition::Fixed),
            "wontfix" => Ok(Disposition::WontFix),
            "reorg" => Ok(Disposition::Reorg),
            _ => Err(Error::InvalidDisposition(s.to_string())),
        }
    }
}

fn strip_symbol(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix(':').unwrap_or(s)
}

/// One timestamped event in an issue's log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Who recorded it, e.g. `Jane Doe <jane@example.com>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Event description (`commented`, `changed status from ...`).
    pub action: String,
    /// Free text body. Empty when the event carried no comment.
    pub comment: String,
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        action: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        LogEntry {
            timestamp,
            author: None,
            action: action.into(),
            comment: comment.into(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Parse the action text as a status change, if it is one.
    ///
    /// Returns `Ok(None)` for actions that are not status changes at all
    /// (`created`, `commented`, `edited title`, ...).
    pub fn status_change(&self) -> Result<Option<StatusChange>> {
        StatusChange::parse(&self.action)
    }
}

/// The primary entity: a tracked unit of work and its event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier (a 40-character SHA-1 in Ditz projects).
    pub id: String,
    /// Short description of the work.
    pub title: String,
    /// Current workflow state.
    pub status: Status,
    /// Resolution of a closed issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    /// Events in recorded order.
    pub log: Vec<LogEntry>,
}

impl Issue {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            title: title.into(),
            status: Status::Unstarted,
            disposition: None,
            log: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: LogEntry) -> Self {
        self.log.push(entry);
        self
    }

    /// Abbreviated identifier for display.
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// First five characters of an issue identifier.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(5) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

const CHANGE_STATUS: &str = "changed status from ";
const CLOSE_STATUS: &str = "closed issue with disposition ";

/// A status transition recorded in an issue log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Previous status; absent for close events, which only name the disposition.
    pub from: Option<String>,
    /// New status or close disposition.
    pub to: String,
}

impl StatusChange {
    /// Parse Ditz action text.
    ///
    /// - `changed status from unstarted to in_progress` → `(Some("unstarted"), "in_progress")`
    /// - `closed issue with disposition fixed` → `(None, "fixed")`
    /// - anything else → `None`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatusChange`] when the text starts like a
    /// status change but is not shaped like one.
    pub fn parse(action: &str) -> Result<Option<StatusChange>> {
        if let Some(rest) = action.strip_prefix(CLOSE_STATUS) {
            let to = rest.trim();
            if to.is_empty() {
                return Err(Error::InvalidStatusChange(action.to_string()));
            }
            return Ok(Some(StatusChange {
                from: None,
                to: to.to_string(),
            }));
        }

        if let Some(rest) = action.strip_prefix(CHANGE_STATUS) {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            return match parts.as_slice() {
                [from, "to", to] => Ok(Some(StatusChange {
                    from: Some((*from).to_string()),
                    to: (*to).to_string(),
                })),
                _ => Err(Error::InvalidStatusChange(action.to_string())),
            };
        }

        Ok(None)
    }

    /// Returns true if this transition starts work.
    pub fn starts_work(&self) -> bool {
        self.to == Status::InProgress.as_str()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
