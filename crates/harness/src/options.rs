// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program-test options.
//!
//! Options can be built in code, or loaded from TOML:
//!
//! ```toml
//! dir = "samples/minimal"
//! dependencies = ["@lumi/lumi"]
//! edit_dirs = ["samples/minimal/step2"]
//!
//! [config]
//! "aws:config:region" = "us-east-2"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// What to test and which programs to test it with.
///
/// `None` list fields mean "not set", which matters when layering options
/// with [`ProgramTestOptions::with`]: an empty list set explicitly replaces
/// the base, an unset one keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramTestOptions {
    /// Program directory to test.
    pub dir: PathBuf,
    /// Packages to `yarn link` into the working copy (e.g. `@lumi/aws`).
    pub dependencies: Option<Vec<String>>,
    /// Config keys and values to set on the environment.
    pub config: BTreeMap<String, String>,
    /// Edits applied as successive deployments, in order.
    pub edit_dirs: Option<Vec<PathBuf>>,
    /// Environment name (default `integrationtesting`).
    pub environment: Option<String>,
    /// Output label; derived from `dir` when unset.
    pub label: Option<String>,
    /// `lumi` executable; found on `$PATH` when unset.
    pub lumi_bin: Option<PathBuf>,
    /// `lumijs` executable; found on `$PATH` when unset.
    pub lumijs_bin: Option<PathBuf>,
    /// `yarn` executable; found on `$PATH` when unset.
    pub yarn_bin: Option<PathBuf>,
}

impl ProgramTestOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Layer `overrides` on top of these options.
    ///
    /// A non-empty `dir` and any set field replace the base value; config
    /// entries are merged key by key, with `overrides` winning.
    pub fn with(mut self, overrides: ProgramTestOptions) -> Self {
        if !overrides.dir.as_os_str().is_empty() {
            self.dir = overrides.dir;
        }
        if overrides.dependencies.is_some() {
            self.dependencies = overrides.dependencies;
        }
        self.config.extend(overrides.config);
        if overrides.edit_dirs.is_some() {
            self.edit_dirs = overrides.edit_dirs;
        }
        self.environment = overrides.environment.or(self.environment);
        self.label = overrides.label.or(self.label);
        self.lumi_bin = overrides.lumi_bin.or(self.lumi_bin);
        self.lumijs_bin = overrides.lumijs_bin.or(self.lumijs_bin);
        self.yarn_bin = overrides.yarn_bin.or(self.yarn_bin);
        self
    }

    pub fn dependencies(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    pub fn edit_dirs(&self) -> &[PathBuf] {
        self.edit_dirs.as_deref().unwrap_or_default()
    }

    /// Parse options from a TOML string.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load options from a TOML file. Relative directories are taken
    /// relative to the file's location.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut opts = Self::from_toml_str(&content, path)?;
        if let Some(base) = path.parent() {
            opts.resolve_relative(base);
        }
        Ok(opts)
    }

    /// Anchor relative `dir`, `edit_dirs` and program paths at `base`.
    pub fn resolve_relative(&mut self, base: &Path) {
        for bin in [&mut self.lumi_bin, &mut self.lumijs_bin, &mut self.yarn_bin] {
            if let Some(path) = bin.as_mut().filter(|p| p.is_relative()) {
                *path = base.join(&*path);
            }
        }
        if !self.dir.as_os_str().is_empty() && self.dir.is_relative() {
            self.dir = base.join(&self.dir);
        }
        if let Some(edits) = &mut self.edit_dirs {
            for edit in edits.iter_mut().filter(|e| e.is_relative()) {
                *edit = base.join(&*edit);
            }
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
