// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dh_core::{short_id, Report, WorkLogRecord};

const EMPTY_MESSAGE: &str = "No work logged.";

/// Render hours as `<h>h<mm>'`, or `<mm>'` under an hour.
///
/// Hours are rounded to the nearest minute and right-aligned to 7 columns:
/// - `27.77` → ` 27h46'`
/// - `1.0` → `  1h00'`
/// - `0.75` → `    45'`
pub fn format_hours(hours: f64) -> String {
    let minutes = (hours * 60.0).round().max(0.0) as u64;
    let (h, m) = (minutes / 60, minutes % 60);
    if h > 0 {
        format!("{:3}h{:02}'", h, m)
    } else {
        format!("    {:2}'", m)
    }
}

/// Format one issue total: `  3h30' 5b2a1 Title`.
pub fn format_issue_line(id: &str, title: &str, hours: f64) -> String {
    format!("{} {} {}", format_hours(hours), short_id(id), title)
}

/// Format one record for `entries`: `2024-01-01 17:30   1h00' 5b2a1 fixed it`.
pub fn format_record(record: &WorkLogRecord) -> String {
    let line = format!(
        "{} {} {}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        format_hours(record.hours),
        short_id(&record.issue_id),
    );
    if record.description.is_empty() {
        line
    } else {
        format!("{} {}", line, first_line(&record.description))
    }
}

/// Lines of the text report.
///
/// Issues are listed by id, followed by the total. Daily and weekly
/// sections follow when requested.
pub fn format_report(report: &Report, days: bool, weeks: bool) -> Vec<String> {
    if report.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    let mut lines: Vec<String> = report
        .issues
        .iter()
        .map(|(id, total)| format_issue_line(id, &total.title, total.hours))
        .collect();
    lines.push(format!("{} Total", format_hours(report.total)));

    if days {
        lines.push(String::new());
        lines.push("Daily:".to_string());
        for (day, hours) in &report.days {
            lines.push(format!("{} {}", day.format("%Y-%m-%d"), format_hours(*hours)));
        }
    }

    if weeks {
        lines.push(String::new());
        lines.push("Weekly:".to_string());
        for (week, hours) in &report.weeks {
            lines.push(format!("{:<10} {}", week.to_string(), format_hours(*hours)));
        }
    }

    lines
}

/// Lines of the `entries` listing, oldest first.
pub fn format_records(report: &Report) -> Vec<String> {
    if report.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }
    sorted_records(report).into_iter().map(format_record).collect()
}

/// Records ordered by time, then issue id.
pub fn sorted_records(report: &Report) -> Vec<&WorkLogRecord> {
    let mut records: Vec<&WorkLogRecord> = report.records.iter().collect();
    records.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.issue_id.cmp(&b.issue_id))
    });
    records
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim_end()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
