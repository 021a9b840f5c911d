// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the `ditz-hours` binary.
//!
//! The spec files under `cli/` are compiled as `[[test]]` targets of the
//! `ditz-hours` crate so that `cargo_bin_cmd!` can find the binary.
