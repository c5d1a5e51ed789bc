// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for program tests

use std::io;
use std::path::PathBuf;

use pt_exec::{LookupError, SequenceError};
use pt_workspace::CopyError;
use thiserror::Error;

/// Errors loading options or suite manifests
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors that fail a program test
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no program directory given")]
    MissingDir,
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("failed to copy source project {} to a new temp dir: {source}", .dir.display())]
    Prepare {
        dir: PathBuf,
        #[source]
        source: CopyError,
    },
    #[error("expected to apply edit {} atop {}: {source}", .edit.display(), .base.display())]
    Edit {
        edit: PathBuf,
        base: PathBuf,
        #[source]
        source: CopyError,
    },
    #[error(transparent)]
    Step(#[from] SequenceError),
    #[error("teardown failed: {0}")]
    Teardown(#[source] SequenceError),
    #[error("program test task aborted: {0}")]
    Aborted(String),
}
