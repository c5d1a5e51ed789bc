// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake `lumi`, `lumijs` and `yarn` programs for exercising the lifecycle.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.
//!
//! Each fake is a small shell script that appends `<tool> <args>` to a shared
//! call log, echoes the same line (with the number of deployments recorded in
//! the working copy's `.lumi/deploys`) to stdout, and succeeds unless its
//! command line matches the configured failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::options::ProgramTestOptions;

/// A directory of fake toolchain scripts plus their call log.
#[derive(Debug)]
pub struct FakeToolchain {
    dir: TempDir,
    log: PathBuf,
}

impl FakeToolchain {
    /// Fakes that always succeed.
    pub fn new() -> io::Result<Self> {
        Self::build(None)
    }

    /// Fakes where the invocation whose `<tool> <args>` equals `command`
    /// exits 1.
    pub fn failing(command: &str) -> io::Result<Self> {
        Self::build(Some(command))
    }

    fn build(fail: Option<&str>) -> io::Result<Self> {
        let dir = TempDir::new()?;
        let log = dir.path().join("calls.log");
        fs::write(&log, "")?;
        for tool in ["lumi", "lumijs", "yarn"] {
            write_script(&dir.path().join(tool), &script(tool, &log, fail.unwrap_or("")))?;
        }
        Ok(Self { dir, log })
    }

    pub fn lumi(&self) -> PathBuf {
        self.dir.path().join("lumi")
    }

    pub fn lumijs(&self) -> PathBuf {
        self.dir.path().join("lumijs")
    }

    pub fn yarn(&self) -> PathBuf {
        self.dir.path().join("yarn")
    }

    /// Options for `dir` that point at these fakes.
    pub fn options(&self, dir: impl Into<PathBuf>) -> ProgramTestOptions {
        ProgramTestOptions {
            dir: dir.into(),
            lumi_bin: Some(self.lumi()),
            lumijs_bin: Some(self.lumijs()),
            yarn_bin: Some(self.yarn()),
            ..ProgramTestOptions::default()
        }
    }

    /// Every recorded `<tool> <args>` line, in invocation order.
    pub fn calls(&self) -> io::Result<Vec<String>> {
        Ok(fs::read_to_string(&self.log)?
            .lines()
            .map(|l| l.trim_end().to_string())
            .collect())
    }
}

fn script(tool: &str, log: &Path, fail: &str) -> String {
    format!(
        r#"#!/bin/sh
line="{tool} $*"
deploys=0
if [ -f .lumi/deploys ]; then deploys=$(wc -l < .lumi/deploys | tr -d ' '); fi
echo "$line" >> '{log}'
echo "$line (deploys=$deploys)"
if [ "$line" = '{fail}' ]; then
  echo "{tool}: failing on purpose" >&2
  exit 1
fi
if [ "$line" = "lumi deploy" ]; then
  mkdir -p .lumi
  echo deployed >> .lumi/deploys
fi
"#,
        log = log.display(),
    )
}

fn write_script(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}

/// Write `files` (relative path, content) under `root`.
pub fn write_program(root: &Path, files: &[(&str, &str)]) -> io::Result<()> {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(())
}
