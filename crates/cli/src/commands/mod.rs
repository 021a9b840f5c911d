// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod entries;
pub mod report;

use std::path::{Path, PathBuf};

use dh_core::{Aggregator, IssueFilter, Report, TimeRange};

use crate::cli::{FilterArgs, WorkLogArgs};
use crate::config::Config;
use crate::error::Result;
use crate::loader;

/// Directory whose `.ditz-hours.toml` applies to a run.
///
/// The first directory argument, else the parent of the first file argument.
pub fn config_dir(paths: &[PathBuf]) -> PathBuf {
    if let Some(dir) = paths.iter().find(|p| p.is_dir()) {
        return dir.clone();
    }
    paths
        .first()
        .and_then(|p| p.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Load, filter and aggregate the issues selected by the arguments.
///
/// Skipped issue files and issue filters that select nothing are reported as
/// warnings on stderr. Neither is fatal.
pub fn build_report(filter: &FilterArgs, worklog: &WorkLogArgs) -> Result<Report> {
    let config = crate::time_phase!("config::load", {
        Config::load(&config_dir(&filter.paths))?
    })
    .with_overrides(worklog.hours_per_day, worklog.days_per_week, worklog.anchor);
    let conventions = config.worklog_config()?;
    let range = TimeRange::new(filter.after, filter.before)?;

    let outcome = crate::time_phase!("load::issues", { loader::load(&filter.paths)? });
    if !outcome.failures.is_empty() {
        eprintln!(
            "warning: skipped {} unreadable issue file(s) (use -v for details)",
            outcome.failures.len()
        );
    }

    let issue_filter = IssueFilter::new(filter.issue.iter().cloned());
    for missing in issue_filter.unmatched(outcome.issues.iter().map(|i| i.id.as_str())) {
        eprintln!("warning: no issue matches '{}'", missing);
    }

    let aggregator = Aggregator::new(&conventions)?
        .with_range(range)
        .with_filter(issue_filter)
        .with_source(filter.source);
    let report = crate::time_phase!("aggregate", { aggregator.aggregate(&outcome.issues) });
    tracing::info!(
        "{} records, {:.2} hours across {} issues",
        report.records.len(),
        report.total,
        report.issues.len()
    );
    Ok(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
