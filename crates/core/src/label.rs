// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output labels for program-test runs.

use std::path::Path;

/// Width of the directory column in a label.
const LABEL_WIDTH: usize = 30;

/// Build the line prefix for output belonging to the program in `dir`.
///
/// The label shows the last 30 characters of the directory, right-aligned
/// in a fixed-width column so that interleaved output from parallel runs
/// lines up: `"[      samples/minimal/nodejs ] "`.
pub fn dir_label(dir: &Path) -> String {
    let text = dir.display().to_string();
    let skip = text.chars().count().saturating_sub(LABEL_WIDTH);
    let tail: String = text.chars().skip(skip).collect();
    format!("[ {tail:>LABEL_WIDTH$} ] ")
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
