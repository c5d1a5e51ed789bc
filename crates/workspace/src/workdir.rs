// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fresh temporary working copies of a program directory.

use std::path::Path;

use tempfile::TempDir;

use crate::copy::{copy_tree, CopyError};

/// Prefix for working copy directory names.
const WORKDIR_PREFIX: &str = "lumi-integration-test-";

/// A private copy of a source tree in a new temporary directory.
///
/// Every working copy gets its own directory, so concurrent runs never share
/// files. The directory is removed when the `Workdir` is dropped.
#[derive(Debug)]
pub struct Workdir {
    dir: TempDir,
}

impl Workdir {
    /// Copy `src` into a new temporary directory, leaving out the top-level
    /// entry named `exclude`.
    pub fn create(src: &Path, exclude: Option<&str>) -> Result<Self, CopyError> {
        let dir = tempfile::Builder::new()
            .prefix(WORKDIR_PREFIX)
            .tempdir()
            .map_err(CopyError::TempDir)?;
        copy_tree(src, dir.path(), exclude)?;
        tracing::debug!(src = %src.display(), dir = %dir.path().display(), "created working copy");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copy the `name` subtree of `from` atop this working copy.
    ///
    /// Returns `false` without touching anything when `from/name` is not a
    /// directory.
    pub fn overlay(&self, from: &Path, name: &str) -> Result<bool, CopyError> {
        let source = from.join(name);
        if !source.is_dir() {
            return Ok(false);
        }
        copy_tree(&source, &self.path().join(name), None)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "workdir_tests.rs"]
mod tests;
