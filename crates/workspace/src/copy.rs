// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive directory copy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while copying a tree
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to create temp dir: {0}")]
    TempDir(#[source] io::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Copy the tree at `src` into `dst`, skipping the direct child of `src`
/// named `exclude`.
///
/// Regular files are copied with their permissions; directories are created
/// with default permissions. Symbolic links and special files are skipped.
/// Missing parent directories under `dst` are created as needed, and files
/// already present in `dst` are overwritten.
pub fn copy_tree(src: &Path, dst: &Path, exclude: Option<&str>) -> Result<(), CopyError> {
    let walker = WalkDir::new(src)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.depth() == 1 && exclude.is_some_and(|name| entry.file_name() == name))
        });

    for entry in walker {
        let entry = entry.map_err(|source| CopyError::Walk {
            path: source.path().unwrap_or(src).to_path_buf(),
            source,
        })?;

        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);
        let io_err = |source: io::Error| CopyError::Io {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(io_err)?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            // fs::copy carries the permission bits over.
            fs::copy(entry.path(), &target).map_err(io_err)?;
        } else {
            tracing::debug!(path = %entry.path().display(), "skipping non-regular file");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "copy_tests.rs"]
mod tests;
