// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Passing results: green
    pub const PASS: u8 = 71;
    /// Failing results: red
    pub const FAIL: u8 = 167;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(text: &str, code: u8, colorize: bool) -> String {
    if colorize {
        format!("\x1b[38;5;{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Status word for a passing program.
pub fn passed(colorize: bool) -> String {
    paint("ok", codes::PASS, colorize)
}

/// Status word for a failing program.
pub fn failed(colorize: bool) -> String {
    paint("FAILED", codes::FAIL, colorize)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
