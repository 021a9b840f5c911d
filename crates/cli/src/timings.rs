// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing instrumentation for debugging.
//!
//! Enable with `DH_TIMINGS=1` environment variable.
//! Output goes to stderr in format: `[timings] phase::name XXms`

use std::time::Instant;

pub const TIMINGS_ENV: &str = "DH_TIMINGS";

/// Check if timings are enabled via DH_TIMINGS environment variable.
#[inline]
pub fn timings_enabled() -> bool {
    std::env::var_os(TIMINGS_ENV).is_some_and(|v| !v.is_empty() && v != "0")
}

/// Print a timing result to stderr if timings are enabled.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if timings_enabled() {
        eprintln!("{}", format_timing(phase, start.elapsed().as_millis()));
    }
}

fn format_timing(phase: &str, millis: u128) -> String {
    format!("[timings] {} {}ms", phase, millis)
}

/// Macro for timing a block of code.
///
/// Usage:
/// ```rust,ignore
/// let outcome = time_phase!("load::issues", {
///     loader::load(&paths)?
/// });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}

#[cfg(test)]
#[path = "timings_tests.rs"]
mod tests;
