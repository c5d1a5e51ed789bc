// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pt suite <manifest>` - Run every program in a manifest concurrently

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use pt_harness::{run_suite, SuiteManifest, SuiteOutcome};

use crate::color;
use crate::env;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct SuiteArgs {
    /// Suite manifest (TOML)
    pub manifest: PathBuf,

    /// Only run programs whose directory contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

pub async fn handle(args: SuiteArgs) -> Result<()> {
    let manifest = SuiteManifest::load(&args.manifest)?;
    let mut tests = manifest.tests(&env::program_overrides());
    if let Some(filter) = &args.filter {
        tests.retain(|t| t.options().dir.to_string_lossy().contains(filter.as_str()));
    }
    if tests.is_empty() {
        bail!("no programs to run in {}", args.manifest.display());
    }

    tracing::debug!(programs = tests.len(), "running suite");
    let outcomes = run_suite(tests, || (std::io::stdout(), std::io::stderr())).await;

    let (lines, failed) = summarize(&outcomes, color::should_colorize());
    println!();
    for line in lines {
        println!("{line}");
    }

    if failed > 0 {
        // Failures were already reported in the summary
        return Err(ExitError::new(1, String::new()).into());
    }
    Ok(())
}

/// Summary lines for `outcomes`, plus the number of failed programs.
fn summarize(outcomes: &[SuiteOutcome], colorize: bool) -> (Vec<String>, usize) {
    let mut lines = Vec::with_capacity(outcomes.len() + 1);
    let mut failed = 0;
    for outcome in outcomes {
        let dir = outcome.dir.display();
        match &outcome.result {
            Ok(_) => lines.push(format!("{} {dir}", color::passed(colorize))),
            Err(e) => {
                failed += 1;
                lines.push(format!("{} {dir}: {e}", color::failed(colorize)));
            }
        }
    }
    lines.push(format!(
        "{} passed; {} failed",
        outcomes.len() - failed,
        failed
    ));
    (lines, failed)
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
