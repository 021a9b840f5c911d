// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dh_core::{Report, WorkLogRecord};
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat, WorkLogArgs};
use crate::display::{format_records, sorted_records};
use crate::error::Result;

use super::build_report;

/// JSON output structure for the entries command.
#[derive(Serialize)]
struct EntriesJson<'a> {
    records: Vec<&'a WorkLogRecord>,
    total: f64,
}

pub fn run(filter: &FilterArgs, worklog: &WorkLogArgs, output: OutputFormat) -> Result<()> {
    let report = build_report(filter, worklog)?;
    println!("{}", render(&report, output)?);
    Ok(())
}

pub(crate) fn render(report: &Report, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_records(report).join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&EntriesJson {
            records: sorted_records(report),
            total: report.total,
        })?),
    }
}

#[cfg(test)]
#[path = "entries_tests.rs"]
mod tests;
