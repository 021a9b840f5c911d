// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp parsing for CLI bounds and Ditz log events.
//!
//! CLI bounds accept a date with optional hour and minute, separated from
//! the date by a space, `T` or `_`:
//!
//! ```text
//! 2008-05-06          midnight
//! 2008-05-06 18       18:00
//! 2008-05-06_18:45    18:45
//! 2008-05-06T18:45:10
//! 2008-05-06T18:45:10+02:00
//! ```
//!
//! All bounds without an explicit offset are UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use dh_core::midnight;

use crate::error::{Error, Result};

const DATE_LEN: usize = 10;

/// Parse a `--after` / `--before` value.
pub fn parse_bound(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    let invalid = || Error::InvalidTimestamp {
        value: value.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if value.len() < DATE_LEN || !value.is_char_boundary(DATE_LEN) {
        return Err(invalid());
    }
    let (date_part, rest) = value.split_at(DATE_LEN);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())?;

    let mut chars = rest.chars();
    let time = match chars.next() {
        None => return Ok(midnight(date)),
        Some(' ' | 'T' | '_') => parse_time(chars.as_str()).ok_or_else(invalid)?,
        Some(_) => return Err(invalid()),
    };
    Ok(date.and_time(time).and_utc())
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if !s.is_empty() && s.len() <= 2 && s.chars().all(|c| c.is_ascii_digit()) {
        return NaiveTime::from_hms_opt(s.parse().ok()?, 0, 0);
    }
    ["%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// Parse a timestamp as Ditz writes it: `2008-06-16 10:39:28.385966 Z`.
///
/// Also accepts an explicit numeric offset, RFC 3339, and a bare date.
pub fn parse_log_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    let utc = value
        .strip_suffix('Z')
        .map(str::trim_end)
        .unwrap_or(value);
    if let Ok(naive) = NaiveDateTime::parse_from_str(utc, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(midnight)
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
