// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pt run <dir>` - Run one program through the lifecycle

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pt_harness::{ProgramTest, ProgramTestOptions};

use crate::{color, env};

#[derive(Args)]
pub struct RunArgs {
    /// Program directory to test
    pub dir: Option<PathBuf>,

    /// Options file (TOML) to start from; flags override it
    #[arg(long = "options", value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Package to `yarn link` before compiling (repeatable)
    #[arg(short = 'd', long = "dependency", value_name = "PACKAGE")]
    pub dependencies: Vec<String>,

    /// Config entry to set on the environment (key=value, repeatable)
    #[arg(short = 'c', long = "config", value_parser = parse_key_val)]
    pub config: Vec<(String, String)>,

    /// Edit directory deployed after the initial program (repeatable, in order)
    #[arg(short = 'e', long = "edit", value_name = "DIR")]
    pub edits: Vec<PathBuf>,

    /// Environment name
    #[arg(long)]
    pub environment: Option<String>,

    /// Output line label (default: derived from the directory)
    #[arg(long)]
    pub label: Option<String>,

    /// `lumi` executable (default: $PT_LUMI_BIN, then $PATH)
    #[arg(long = "lumi-bin", value_name = "PATH")]
    pub lumi_bin: Option<PathBuf>,

    /// `lumijs` executable (default: $PT_LUMIJS_BIN, then $PATH)
    #[arg(long = "lumijs-bin", value_name = "PATH")]
    pub lumijs_bin: Option<PathBuf>,

    /// `yarn` executable (default: $PT_YARN_BIN, then $PATH)
    #[arg(long = "yarn-bin", value_name = "PATH")]
    pub yarn_bin: Option<PathBuf>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

impl RunArgs {
    /// Options given on the command line. Repeatable flags that were not
    /// used stay unset so they don't clear values from an options file.
    fn overrides(self) -> ProgramTestOptions {
        fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
            (!items.is_empty()).then_some(items)
        }

        ProgramTestOptions {
            dir: self.dir.unwrap_or_default(),
            dependencies: non_empty(self.dependencies),
            config: self.config.into_iter().collect(),
            edit_dirs: non_empty(self.edits),
            environment: self.environment,
            label: self.label,
            lumi_bin: self.lumi_bin,
            lumijs_bin: self.lumijs_bin,
            yarn_bin: self.yarn_bin,
        }
    }
}

/// Layer options: environment, then the options file, then flags.
fn resolve_options(args: RunArgs) -> Result<ProgramTestOptions> {
    let file = match &args.options {
        Some(path) => ProgramTestOptions::load(path)?,
        None => ProgramTestOptions::default(),
    };
    Ok(env::program_overrides().with(file).with(args.overrides()))
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let test = ProgramTest::new(resolve_options(args)?);
    let dir = test.options().dir.display().to_string();
    let colorize = color::should_colorize();
    tracing::debug!(%dir, label = %test.label(), "running program test");

    match test.run(std::io::stdout(), std::io::stderr()).await {
        Ok(report) => {
            println!(
                "{} {} ({} steps, {} edits)",
                color::passed(colorize),
                dir,
                report.steps,
                report.edits
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", color::failed(colorize), dir);
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
