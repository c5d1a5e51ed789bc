// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort informational output.

use std::fmt;
use std::io::Write;

/// Write an informational line that must never fail the caller.
///
/// Progress banners and resolved-path notices are diagnostics only; a sink
/// that rejects them is logged and otherwise ignored.
pub fn note<W: Write + ?Sized>(w: &mut W, args: fmt::Arguments<'_>) {
    if let Err(e) = w.write_fmt(args) {
        tracing::debug!(error = %e, "dropped informational output");
    }
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
