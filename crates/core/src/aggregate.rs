// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of work-log records into per-issue, daily and weekly totals.
//!
//! The [`Aggregator`] walks every log entry of every selected issue, keeps the
//! entries inside its [`TimeRange`], turns them into [`WorkLogRecord`]s and
//! sums them into a [`Report`]. Records come from one of two [`Source`]s:
//!
//! - [`Source::Comments`]: work-log annotations in comment text (`1h fixed it`)
//! - [`Source::Status`]: time between entering and leaving `in_progress`

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::range::TimeRange;
use crate::worklog::{WorkLog, WorkLogConfig, WorkLogParser};

/// Where work time is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Work-log annotations in comments.
    #[default]
    Comments,
    /// Intervals spent in the `in_progress` status.
    Status,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Comments => "comments",
            Source::Status => "status",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "comments" | "comment" => Ok(Source::Comments),
            "status" => Ok(Source::Status),
            _ => Err(Error::InvalidSource(s.to_string())),
        }
    }
}

/// Selects issues by identifier or identifier prefix.
///
/// An empty filter selects every issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    ids: Vec<String>,
}

impl IssueFilter {
    pub fn all() -> Self {
        IssueFilter::default()
    }

    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IssueFilter {
            ids: ids
                .into_iter()
                .map(Into::into)
                .filter(|id: &String| !id.is_empty())
                .collect(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true if `id` equals or starts with one of the filter entries.
    pub fn matches(&self, id: &str) -> bool {
        self.is_all() || self.ids.iter().any(|wanted| id.starts_with(wanted.as_str()))
    }

    /// Filter entries that select none of `ids`.
    pub fn unmatched<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        self.ids
            .iter()
            .filter(|wanted| !ids.clone().into_iter().any(|id| id.starts_with(wanted.as_str())))
            .cloned()
            .collect()
    }
}

/// "`hours` spent on `issue_id` at `timestamp`".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLogRecord {
    pub issue_id: String,
    pub timestamp: DateTime<Utc>,
    pub hours: f64,
    pub description: String,
    pub source: Source,
}

/// An ISO 8601 week, keyed by week-numbering year.
///
/// Dec 29-31 can belong to week 1 of the next year, and Jan 1-3 to the last
/// week of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        WeekKey {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hours booked against one issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTotal {
    pub title: String,
    pub hours: f64,
}

/// Totals computed from one set of records.
///
/// The per-issue, per-day and per-week maps each sum to [`Report::total`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub source: Source,
    #[serde(skip_serializing_if = "TimeRange::is_unbounded")]
    pub range: TimeRange,
    pub issues: BTreeMap<String, IssueTotal>,
    pub days: BTreeMap<NaiveDate, f64>,
    pub weeks: BTreeMap<WeekKey, f64>,
    pub total: f64,
    pub records: Vec<WorkLogRecord>,
}

impl Report {
    fn add(&mut self, title: &str, record: WorkLogRecord) {
        let day = record.timestamp.date_naive();

        self.issues
            .entry(record.issue_id.clone())
            .or_insert_with(|| IssueTotal {
                title: title.to_string(),
                hours: 0.0,
            })
            .hours += record.hours;
        *self.days.entry(day).or_insert(0.0) += record.hours;
        *self.weeks.entry(WeekKey::of(day)).or_insert(0.0) += record.hours;
        self.total += record.hours;
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hours for `issue_id`, zero if it has none.
    pub fn issue_hours(&self, issue_id: &str) -> f64 {
        self.issues.get(issue_id).map_or(0.0, |t| t.hours)
    }
}

/// Turns issues into a [`Report`].
#[derive(Debug, Clone)]
pub struct Aggregator {
    parser: WorkLogParser,
    range: TimeRange,
    filter: IssueFilter,
    source: Source,
}

impl Aggregator {
    /// Create an aggregator counting comment annotations under `config`,
    /// over all issues and all time.
    pub fn new(config: &WorkLogConfig) -> Result<Self> {
        Ok(Aggregator {
            parser: WorkLogParser::new(config)?,
            range: TimeRange::unbounded(),
            filter: IssueFilter::all(),
            source: Source::default(),
        })
    }

    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_filter(mut self, filter: IssueFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Records for a single issue, ignoring the issue filter.
    ///
    /// Zero-hour records are dropped, so they reach neither totals nor listings.
    pub fn records(&self, issue: &Issue) -> Vec<WorkLogRecord> {
        let records = match self.source {
            Source::Comments => self.comment_records(issue),
            Source::Status => self.status_records(issue),
        };
        records.into_iter().filter(|r| r.hours > 0.0).collect()
    }

    /// Sum the records of every selected issue.
    pub fn aggregate<'a, I>(&self, issues: I) -> Report
    where
        I: IntoIterator<Item = &'a Issue>,
    {
        let mut report = Report {
            source: self.source,
            range: self.range,
            ..Report::default()
        };
        for issue in issues {
            if !self.filter.matches(&issue.id) {
                continue;
            }
            for record in self.records(issue) {
                report.add(&issue.title, record);
            }
        }
        report
    }

    fn comment_records(&self, issue: &Issue) -> Vec<WorkLogRecord> {
        issue
            .log
            .iter()
            .filter(|entry| self.range.contains(entry.timestamp))
            .filter_map(|entry| match self.parser.parse(&entry.comment) {
                WorkLog::Matched { hours, description } => Some(WorkLogRecord {
                    issue_id: issue.id.clone(),
                    timestamp: entry.timestamp,
                    hours,
                    description,
                    source: Source::Comments,
                }),
                WorkLog::NoMatch => {
                    if !entry.comment.is_empty() {
                        tracing::trace!(issue = issue.short_id(), "no work-log annotation");
                    }
                    None
                }
            })
            .collect()
    }

    /// Intervals opened by entering `in_progress` inside the range and closed
    /// by the next transition to any other status. Open intervals at the end
    /// of the log are not counted.
    fn status_records(&self, issue: &Issue) -> Vec<WorkLogRecord> {
        let mut records = Vec::new();
        let mut started: Option<DateTime<Utc>> = None;

        for entry in &issue.log {
            let change = match entry.status_change() {
                Ok(Some(change)) => change,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(issue = issue.short_id(), "skipping log entry: {}", e);
                    continue;
                }
            };

            if change.starts_work() {
                if self.range.contains(entry.timestamp) {
                    started = Some(entry.timestamp);
                }
                continue;
            }

            let Some(start) = started.take() else {
                continue;
            };
            let elapsed = entry.timestamp.signed_duration_since(start);
            if elapsed.num_milliseconds() < 0 {
                tracing::warn!(
                    issue = issue.short_id(),
                    "status change at {} precedes start at {}",
                    entry.timestamp,
                    start
                );
                continue;
            }
            records.push(WorkLogRecord {
                issue_id: issue.id.clone(),
                timestamp: start,
                hours: duration_hours(elapsed),
                description: format!("in_progress until {}", change.to),
                source: Source::Status,
            });
        }

        records
    }
}

fn duration_hours(elapsed: chrono::Duration) -> f64 {
    match elapsed.num_microseconds() {
        Some(us) => us as f64 / 3_600_000_000.0,
        None => elapsed.num_seconds() as f64 / 3_600.0,
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
