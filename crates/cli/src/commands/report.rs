// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dh_core::Report;

use crate::cli::{FilterArgs, Granularity, OutputFormat, WorkLogArgs};
use crate::display::format_report;
use crate::error::Result;

use super::build_report;

pub fn run(
    filter: &FilterArgs,
    worklog: &WorkLogArgs,
    granularity: Granularity,
    output: OutputFormat,
) -> Result<()> {
    let report = build_report(filter, worklog)?;
    println!("{}", render(&report, granularity, output)?);
    Ok(())
}

/// Render a report for stdout.
///
/// JSON always carries every breakdown; granularity only shapes text output.
pub(crate) fn render(
    report: &Report,
    granularity: Granularity,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_report(
            report,
            granularity.shows_days(),
            granularity.shows_weeks(),
        )
        .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
