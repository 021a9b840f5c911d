// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work-log annotations embedded in comment text.
//!
//! A comment records work time when it contains an annotation of the form
//! `<number><unit>`, optionally followed by a separator and a description:
//!
//! ```text
//! 1h fixed the bug
//! 30m: reviewed PR
//! 1.5 hours - pairing on the parser
//! spent 2d on the migration
//! 1h30m paired on the loader
//! ```
//!
//! # Units
//!
//! Units come from an explicit lookup table in [`WorkLogConfig`]. The
//! default table recognizes (case-insensitively):
//!
//! - minutes: `m`, `min`, `mins`, `minute`, `minutes`
//! - hours: `h`, `hr`, `hrs`, `hour`, `hours`
//! - days: `d`, `day`, `days` ([`WorkLogConfig::hours_per_day`] hours each)
//! - weeks: `w`, `wk`, `wks`, `week`, `weeks` (`hours_per_day * days_per_week`)
//!
//! Comments without an annotation produce [`WorkLog::NoMatch`], as do
//! annotations with a negative or malformed number (`-1h`, `1.2.3h`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Length of a working day in hours, used for the `d` unit.
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Working days per week, used for the `w` unit.
pub const DEFAULT_DAYS_PER_WEEK: f64 = 5.0;

/// Separator characters allowed between an annotation and its description.
const SEPARATORS: &[char] = &[':', '-', ',', ';', '|', '–', '—'];

/// A time unit an abbreviation can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Minute,
    Hour,
    Day,
    Week,
}

impl Unit {
    /// Returns the string representation used in configuration and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minute" | "minutes" => Ok(Unit::Minute),
            "hour" | "hours" => Ok(Unit::Hour),
            "day" | "days" => Ok(Unit::Day),
            "week" | "weeks" => Ok(Unit::Week),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

/// Where in a comment an annotation may appear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// The annotation must be the first token of the comment.
    Start,
    /// The annotation may follow other text, as long as it starts a word.
    #[default]
    Anywhere,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Anywhere => "anywhere",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "start" => Ok(Anchor::Start),
            "anywhere" => Ok(Anchor::Anywhere),
            _ => Err(Error::InvalidAnchor(s.to_string())),
        }
    }
}

/// Conventions used to turn annotations into hours.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkLogConfig {
    /// Hours counted for one `d` (default 8).
    pub hours_per_day: f64,
    /// Days counted for one `w` (default 5).
    pub days_per_week: f64,
    /// Anchoring rule for the annotation.
    pub anchor: Anchor,
    /// Abbreviation table, keyed by lowercase abbreviation.
    pub units: BTreeMap<String, Unit>,
}

impl Default for WorkLogConfig {
    fn default() -> Self {
        WorkLogConfig {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            anchor: Anchor::default(),
            units: default_units(),
        }
    }
}

/// The built-in abbreviation table.
pub fn default_units() -> BTreeMap<String, Unit> {
    let table: &[(&[&str], Unit)] = &[
        (&["m", "min", "mins", "minute", "minutes"], Unit::Minute),
        (&["h", "hr", "hrs", "hour", "hours"], Unit::Hour),
        (&["d", "day", "days"], Unit::Day),
        (&["w", "wk", "wks", "week", "weeks"], Unit::Week),
    ];
    table
        .iter()
        .flat_map(|(names, unit)| names.iter().map(move |name| (name.to_string(), *unit)))
        .collect()
}

impl WorkLogConfig {
    /// Add or replace an abbreviation.
    pub fn with_unit(mut self, name: &str, unit: Unit) -> Self {
        self.units.insert(name.to_lowercase(), unit);
        self
    }

    /// Hours represented by one of `unit`.
    pub fn hours_per(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Minute => 1.0 / 60.0,
            Unit::Hour => 1.0,
            Unit::Day => self.hours_per_day,
            Unit::Week => self.hours_per_day * self.days_per_week,
        }
    }

    /// Reject conventions that would produce meaningless totals.
    pub fn validate(&self) -> Result<()> {
        if !(self.hours_per_day.is_finite() && self.hours_per_day > 0.0) {
            return Err(Error::InvalidInput(format!(
                "hours per day must be positive, got {}",
                self.hours_per_day
            )));
        }
        if !(self.days_per_week.is_finite() && self.days_per_week > 0.0) {
            return Err(Error::InvalidInput(format!(
                "days per week must be positive, got {}",
                self.days_per_week
            )));
        }
        if self.units.is_empty() {
            return Err(Error::InvalidInput("unit table is empty".to_string()));
        }
        for name in self.units.keys() {
            if name.is_empty() || !name.chars().all(char::is_alphabetic) {
                return Err(Error::InvalidInput(format!(
                    "unit abbreviation must be alphabetic: '{name}'"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of parsing one comment.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkLog {
    /// The comment records `hours` of work.
    Matched { hours: f64, description: String },
    /// The comment records no work. This is the usual case.
    NoMatch,
}

impl WorkLog {
    pub fn is_match(&self) -> bool {
        matches!(self, WorkLog::Matched { .. })
    }

    /// Hours recorded, zero for [`WorkLog::NoMatch`].
    pub fn hours(&self) -> f64 {
        match self {
            WorkLog::Matched { hours, .. } => *hours,
            WorkLog::NoMatch => 0.0,
        }
    }
}

/// Compiled annotation grammar for a given [`WorkLogConfig`].
#[derive(Debug, Clone)]
pub struct WorkLogParser {
    pattern: Regex,
    group: Regex,
    number: Regex,
    multipliers: BTreeMap<String, f64>,
}

impl WorkLogParser {
    /// Compile the grammar for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`WorkLogConfig::validate`].
    pub fn new(config: &WorkLogConfig) -> Result<Self> {
        config.validate()?;

        let mut names: Vec<&String> = config.units.keys().collect();
        // Longest first so `hours` is tried before `h`.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        let lead = match config.anchor {
            Anchor::Start => r"^\s*",
            Anchor::Anywhere => r"(?:^|\s)",
        };
        let num = r"[-+]?(?:[0-9]|\.[0-9])[0-9.]*";
        // A run of adjacent `<number><unit>` groups (`1h30m`) is one annotation.
        let single = format!(r"{num}\s*(?:{alternation})");
        let pattern = Regex::new(&format!(
            r"(?i){lead}(?P<run>{single}(?:\s*{single})*)\b"
        ))?;
        let group = Regex::new(&format!(r"(?i)(?P<num>{num})\s*(?P<unit>{alternation})"))?;
        let number = Regex::new(r"^\+?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$")?;

        let multipliers = config
            .units
            .iter()
            .map(|(name, unit)| (name.to_lowercase(), config.hours_per(*unit)))
            .collect();

        Ok(WorkLogParser {
            pattern,
            group,
            number,
            multipliers,
        })
    }

    /// Parse a comment body.
    ///
    /// Only the first annotation is considered; a malformed first annotation
    /// makes the whole comment non-matching. Adjacent groups such as
    /// `1h30m` or `2h 15min` are one annotation and their hours are summed.
    pub fn parse(&self, comment: &str) -> WorkLog {
        let Some(caps) = self.pattern.captures(comment) else {
            return WorkLog::NoMatch;
        };
        let (Some(whole), Some(run)) = (caps.get(0), caps.name("run")) else {
            return WorkLog::NoMatch;
        };

        let mut hours = 0.0;
        for group in self.group.captures_iter(run.as_str()) {
            let (Some(num), Some(unit)) = (group.name("num"), group.name("unit")) else {
                return WorkLog::NoMatch;
            };
            match self.group_hours(num.as_str(), unit.as_str()) {
                Some(h) => hours += h,
                None => {
                    tracing::trace!(annotation = run.as_str(), "malformed duration");
                    return WorkLog::NoMatch;
                }
            }
        }

        WorkLog::Matched {
            hours,
            description: describe(&comment[..whole.start()], &comment[whole.end()..]),
        }
    }

    fn group_hours(&self, num: &str, unit: &str) -> Option<f64> {
        if !self.number.is_match(num) {
            return None;
        }
        let value = num.trim_start_matches('+').parse::<f64>().ok()?;
        let multiplier = self.multipliers.get(&unit.to_lowercase())?;
        Some(value * multiplier)
    }
}

/// Pick the description: text after the annotation, else text before it.
fn describe(before: &str, after: &str) -> String {
    let after = after.trim_start();
    let after = after.strip_prefix(SEPARATORS).unwrap_or(after).trim();
    if !after.is_empty() {
        return after.to_string();
    }
    before
        .trim()
        .trim_end_matches(SEPARATORS)
        .trim_end()
        .to_string()
}

#[cfg(test)]
#[path = "worklog_tests.rs"]
mod tests;
