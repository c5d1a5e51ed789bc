// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the external programs a run depends on.

use std::path::{Path, PathBuf};

use crate::error::LookupError;

/// Resolve the program `name`: an explicit override wins, otherwise it is
/// searched for on `$PATH`.
///
/// Overrides are checked for existence so that a typo surfaces as a setup
/// error before any step runs, and made absolute because steps run in
/// their own working directories.
pub fn resolve_program(name: &str, explicit: Option<&Path>) -> Result<PathBuf, LookupError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(LookupError::MissingOverride {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }
        return std::path::absolute(path).map_err(|source| LookupError::Unresolvable {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        });
    }

    let found = which::which(name).map_err(|source| LookupError::NotFound {
        name: name.to_string(),
        source,
    })?;
    tracing::debug!(program = name, path = %found.display(), "resolved from PATH");
    Ok(found)
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod tests;
