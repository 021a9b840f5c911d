// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so `report` and
//! `entries` select the same records.

use chrono::{DateTime, Utc};
use clap::Args;
use dh_core::{Anchor, Source};
use std::path::PathBuf;

use crate::timestamp::parse_bound;

/// Which issues, entries and time window to read.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Ditz project directories, issue directories or issue-*.yaml files
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Only count entries at or after this time (YYYY-MM-DD[ HH[:MM]])
    #[arg(long, short, value_parser = parse_bound)]
    pub after: Option<DateTime<Utc>>,

    /// Only count entries before this time (YYYY-MM-DD[ HH[:MM]])
    #[arg(long, short, value_parser = parse_bound)]
    pub before: Option<DateTime<Utc>>,

    /// Only count these issues (id or id prefix, comma-separated or repeated)
    #[arg(long, short, value_delimiter = ',')]
    pub issue: Vec<String>,

    /// Read hours from comments or from time spent in_progress
    #[arg(long, short, value_parser = parse_source, default_value = "comments")]
    pub source: Source,
}

/// Overrides for the work-log conventions in `.ditz-hours.toml`.
#[derive(Args, Clone, Debug, Default)]
pub struct WorkLogArgs {
    /// Hours counted for one day (`1d`) [default: 8]
    #[arg(long, value_name = "HOURS")]
    pub hours_per_day: Option<f64>,

    /// Days counted for one week (`1w`) [default: 5]
    #[arg(long, value_name = "DAYS")]
    pub days_per_week: Option<f64>,

    /// Where annotations may appear in a comment (start, anywhere) [default: anywhere]
    #[arg(long, value_parser = parse_anchor)]
    pub anchor: Option<Anchor>,
}

fn parse_source(s: &str) -> Result<Source, dh_core::Error> {
    s.parse()
}

fn parse_anchor(s: &str) -> Result<Anchor, dh_core::Error> {
    s.parse()
}
