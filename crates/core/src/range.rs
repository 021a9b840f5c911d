// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Half-open time windows for filtering log entries.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// An optional `[after, before)` window.
///
/// The lower bound is inclusive and the upper bound exclusive, so adjacent
/// windows never count an entry twice. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// A window that contains every timestamp.
    pub fn unbounded() -> Self {
        TimeRange::default()
    }

    /// Build a window, rejecting empty or inverted ones.
    pub fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(a), Some(b)) = (after, before) {
            if a >= b {
                return Err(Error::InvalidRange {
                    after: a.to_rfc3339(),
                    before: b.to_rfc3339(),
                });
            }
        }
        Ok(TimeRange { after, before })
    }

    /// Build a window from calendar dates, each meaning midnight UTC.
    pub fn from_dates(after: Option<NaiveDate>, before: Option<NaiveDate>) -> Result<Self> {
        TimeRange::new(after.map(midnight), before.map(midnight))
    }

    /// Returns true if `timestamp` falls inside the window.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        if let Some(after) = self.after {
            if timestamp < after {
                return false;
            }
        }
        if let Some(before) = self.before {
            if timestamp >= before {
                return false;
            }
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}

/// Start of `date` in UTC.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
