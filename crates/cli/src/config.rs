// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is read from an optional `.ditz-hours.toml` in the project
//! directory and includes:
//! - `hours_per_day`: hours counted for one `d` (default 8)
//! - `days_per_week`: days counted for one `w` (default 5)
//! - `anchor`: `"start"` or `"anywhere"` (default), where annotations may appear
//! - `[units]`: extra abbreviations mapped to `minute`, `hour`, `day` or `week`
//!
//! Command-line flags override file values.

use dh_core::{Anchor, Unit, WorkLogConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".ditz-hours.toml";

/// Settings from `.ditz-hours.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub units: BTreeMap<String, Unit>,
}

impl Config {
    /// Load the config from `dir`, or defaults if the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = Config::parse(&content, &path)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML content; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        hours_per_day: Option<f64>,
        days_per_week: Option<f64>,
        anchor: Option<Anchor>,
    ) -> Self {
        self.hours_per_day = hours_per_day.or(self.hours_per_day);
        self.days_per_week = days_per_week.or(self.days_per_week);
        self.anchor = anchor.or(self.anchor);
        self
    }

    /// Resolve into the conventions used by the work-log parser.
    pub fn worklog_config(&self) -> Result<WorkLogConfig> {
        let defaults = WorkLogConfig::default();
        let mut config = WorkLogConfig {
            hours_per_day: self.hours_per_day.unwrap_or(defaults.hours_per_day),
            days_per_week: self.days_per_week.unwrap_or(defaults.days_per_week),
            anchor: self.anchor.unwrap_or(defaults.anchor),
            units: defaults.units,
        };
        for (name, unit) in &self.units {
            config = config.with_unit(name, *unit);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
