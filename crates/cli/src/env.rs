// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

use pt_harness::ProgramTestOptions;

fn path_var(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// --- Program overrides ---

pub fn lumi_bin() -> Option<PathBuf> {
    path_var("PT_LUMI_BIN")
}

pub fn lumijs_bin() -> Option<PathBuf> {
    path_var("PT_LUMIJS_BIN")
}

pub fn yarn_bin() -> Option<PathBuf> {
    path_var("PT_YARN_BIN")
}

/// Program overrides from the environment, as the lowest options layer.
pub fn program_overrides() -> ProgramTestOptions {
    ProgramTestOptions {
        lumi_bin: lumi_bin(),
        lumijs_bin: lumijs_bin(),
        yarn_bin: yarn_bin(),
        ..ProgramTestOptions::default()
    }
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
