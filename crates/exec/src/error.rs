// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for step execution

use std::io;
use std::path::PathBuf;

use pt_core::StepOutcome;
use thiserror::Error;

/// A required program could not be located.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("expected to find `{name}` binary on $PATH: {source}")]
    NotFound {
        name: String,
        #[source]
        source: which::Error,
    },
    #[error("{name} override {path} does not exist")]
    MissingOverride { name: String, path: PathBuf },
    #[error("failed to resolve {name} override {}: {source}", .path.display())]
    Unresolvable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single step.
#[derive(Debug, Error)]
pub enum StepError {
    /// The program could not be started (not found, not executable, ...).
    #[error("failed to start: {0}")]
    Spawn(#[source] io::Error),
    /// The program ran and exited unsuccessfully.
    #[error("{0}")]
    Exit(StepOutcome),
    /// Forwarding child output to a writer failed.
    #[error("failed to forward output: {0}")]
    Output(#[source] io::Error),
    /// Waiting on the child failed.
    #[error("failed to wait for process: {0}")]
    Wait(#[source] io::Error),
}

/// A sequence stopped at a failing step.
#[derive(Debug, Error)]
#[error("step {} of {total}: expected to successfully invoke '{command}' in {}: {source}", .index + 1, .dir.display())]
pub struct SequenceError {
    /// Zero-based position of the failing step.
    pub index: usize,
    pub total: usize,
    pub command: String,
    pub dir: PathBuf,
    #[source]
    pub source: StepError,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
