// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Suites: many program tests run side by side.
//!
//! A manifest lists programs, with shared defaults:
//!
//! ```toml
//! [defaults]
//! dependencies = ["@lumi/lumi"]
//!
//! [[program]]
//! dir = "samples/minimal"
//!
//! [[program]]
//! dir = "samples/webserver"
//! edit_dirs = ["samples/webserver/variants/update"]
//! ```
//!
//! Each program runs on its own task with its own working copies and
//! writers; programs share nothing but the external binaries.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, HarnessError};
use crate::options::ProgramTestOptions;
use crate::program::{ProgramTest, ProgramTestReport};

/// Parsed suite manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuiteManifest {
    /// Base options every program is layered on.
    pub defaults: ProgramTestOptions,
    #[serde(rename = "program")]
    pub programs: Vec<ProgramTestOptions>,
}

impl SuiteManifest {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a manifest file, anchoring relative directories at its location.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_toml_str(&content, path)?;
        if let Some(base) = path.parent() {
            manifest.defaults.resolve_relative(base);
            for program in &mut manifest.programs {
                program.resolve_relative(base);
            }
        }
        Ok(manifest)
    }

    /// The suite's tests: each program layered over `base`, then the
    /// manifest defaults.
    pub fn tests(&self, base: &ProgramTestOptions) -> Vec<ProgramTest> {
        self.programs
            .iter()
            .map(|program| {
                let opts = base
                    .clone()
                    .with(self.defaults.clone())
                    .with(program.clone());
                ProgramTest::new(opts)
            })
            .collect()
    }
}

/// Result of one program in a suite.
#[derive(Debug)]
pub struct SuiteOutcome {
    pub dir: PathBuf,
    pub result: Result<ProgramTestReport, HarnessError>,
}

/// Run `tests` concurrently, one task each, with writers from `sinks`.
///
/// Outcomes are returned in the order of `tests`. A failing program does
/// not stop the others.
pub async fn run_suite<O, E, F>(tests: Vec<ProgramTest>, sinks: F) -> Vec<SuiteOutcome>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
    F: Fn() -> (O, E),
{
    let handles: Vec<_> = tests
        .into_iter()
        .map(|test| {
            let dir = test.options().dir.clone();
            let (stdout, stderr) = sinks();
            let handle = tokio::spawn(async move { test.run(stdout, stderr).await });
            (dir, handle)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (dir, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(HarnessError::Aborted(e.to_string())),
        };
        match &result {
            Ok(report) => tracing::info!(dir = %dir.display(), steps = report.steps, "program passed"),
            Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "program failed"),
        }
        outcomes.push(SuiteOutcome { dir, result });
    }
    outcomes
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
