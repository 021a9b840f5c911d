// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, WorkLogArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How much detail the report shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    /// Per-issue totals and the grand total
    #[default]
    Totals,
    /// Totals plus hours per day
    Daily,
    /// Totals plus hours per day and per ISO week
    Weekly,
}

impl Granularity {
    pub fn shows_days(&self) -> bool {
        matches!(self, Granularity::Daily | Granularity::Weekly)
    }

    pub fn shows_weeks(&self) -> bool {
        matches!(self, Granularity::Weekly)
    }
}

const QUICKSTART_HELP: &str = "\
Examples:
  ditz-hours report                        Totals for the project in .
  ditz-hours report ~/src/app -g weekly    Add daily and weekly breakdowns
  ditz-hours report -a 2008-07-01 bugs/    Only work logged since July 1st
  ditz-hours report -s status              Time spent in_progress instead
  ditz-hours entries -i 5b2a1              List work logged on one issue";

#[derive(Parser)]
#[command(name = "ditz-hours", version)]
#[command(about = "Sum the hours logged on Ditz issues")]
#[command(
    long_about = "Sum the hours logged on Ditz issues.\n\n\
    Comments such as \"1h fixed the bug\" or \"30m: review\" are read as work logs \
    and totalled per issue, per day and per ISO week."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Increase diagnostic output (-v warnings, -vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report hours per issue, with optional daily and weekly breakdowns
    #[command(after_help = "Examples:\n  \
        ditz-hours report                         Totals for the project in .\n  \
        ditz-hours report -g daily                Add hours per day\n  \
        ditz-hours report -b 2008-08-01 ditz      Work logged before August\n  \
        ditz-hours report -o json                 Machine-readable report")]
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        worklog: WorkLogArgs,

        /// Breakdown to show
        #[arg(long, short, value_enum, default_value_t = Granularity::Totals)]
        granularity: Granularity,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List every counted work-log entry
    Entries {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        worklog: WorkLogArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
