// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dhrs - hours reporting for Ditz issue trackers.
//!
//! This crate provides the `ditz-hours` CLI: it loads a Ditz project's
//! `issue-*.yaml` files, reads work-log annotations such as `1h fixed the bug`
//! from their comments, and reports hours per issue, per day and per ISO week.
//!
//! # Main Components
//!
//! - [`loader`] - Discovery and parsing of Ditz issue files
//! - [`Config`] - Project conventions from `.ditz-hours.toml`
//! - [`Cli`] / [`run`] - Command-line surface and dispatch
//! - [`Error`] - Error types for all operations
//!
//! Parsing and aggregation live in `dh_core`:
//!
//! ```rust,ignore
//! use dhrs::{loader, Config};
//! use dh_core::Aggregator;
//!
//! let outcome = loader::load(&[PathBuf::from(".")])?;
//! let conventions = Config::load(Path::new("."))?.worklog_config()?;
//! let report = Aggregator::new(&conventions)?.aggregate(&outcome.issues);
//! ```

mod cli;
mod commands;
mod display;
pub mod timings;

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod timestamp;

pub use cli::{Cli, Command, FilterArgs, Granularity, OutputFormat, WorkLogArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Report {
            filter,
            worklog,
            granularity,
            output,
        } => commands::report::run(&filter, &worklog, granularity, output),
        Command::Entries {
            filter,
            worklog,
            output,
        } => commands::entries::run(&filter, &worklog, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ditz-hours", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
