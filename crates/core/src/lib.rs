// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dh-core: work-log aggregation for Ditz issue trackers
//!
//! This crate provides the data types, the work-log comment grammar, the
//! time-range filter and the aggregator used by the `ditz-hours` CLI. It does
//! no I/O: callers load [`Issue`]s and hand them to an [`Aggregator`].

pub mod aggregate;
pub mod error;
pub mod issue;
pub mod range;
pub mod worklog;

pub use aggregate::{Aggregator, IssueFilter, IssueTotal, Report, Source, WeekKey, WorkLogRecord};
pub use error::{Error, Result};
pub use issue::{short_id, Disposition, Issue, LogEntry, Status, StatusChange};
pub use range::{midnight, TimeRange};
pub use worklog::{
    default_units, Anchor, Unit, WorkLog, WorkLogConfig, WorkLogParser, DEFAULT_DAYS_PER_WEEK,
    DEFAULT_HOURS_PER_DAY,
};
