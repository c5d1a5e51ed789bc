// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The program-test lifecycle.

use std::io::Write;
use std::path::{Path, PathBuf};

use pt_core::{dir_label, CommandStep, LinePrefixer};
use pt_exec::{resolve_program, LookupError, Sequencer};
use pt_workspace::{CopyError, Workdir};
use tracing::{info, warn};

use crate::error::HarnessError;
use crate::options::ProgramTestOptions;

/// Directory holding `lumi` environment state inside a program.
pub const LUMI_STATE_DIR: &str = ".lumi";

/// Environment name used when the options leave it unset.
pub const DEFAULT_ENVIRONMENT: &str = "integrationtesting";

/// Summary of a program test that passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramTestReport {
    pub label: String,
    /// Commands run, teardown included.
    pub steps: usize,
    /// Edits applied.
    pub edits: usize,
}

/// One program put through the full lifecycle.
#[derive(Debug, Clone)]
pub struct ProgramTest {
    opts: ProgramTestOptions,
}

impl ProgramTest {
    pub fn new(opts: ProgramTestOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ProgramTestOptions {
        &self.opts
    }

    /// Prefix applied to every line of this test's output.
    pub fn label(&self) -> String {
        self.opts
            .label
            .clone()
            .unwrap_or_else(|| dir_label(&self.opts.dir))
    }

    pub fn environment(&self) -> &str {
        self.opts.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Run the lifecycle, writing labeled output to `stdout` and `stderr`.
    ///
    /// Setup problems (missing programs, copy failures) fail the test before
    /// any command runs. Once the project is prepared, teardown runs whether
    /// or not the deployments succeeded.
    pub async fn run<O, E>(&self, stdout: O, stderr: E) -> Result<ProgramTestReport, HarnessError>
    where
        O: Write + Send,
        E: Write + Send,
    {
        if self.opts.dir.as_os_str().is_empty() {
            return Err(HarnessError::MissingDir);
        }
        let tools = Toolchain::resolve(&self.opts)?;

        let label = self.label();
        let mut run = Run {
            opts: &self.opts,
            environment: self.environment(),
            tools,
            seq: Sequencer::new(
                LinePrefixer::new(stdout, label.clone()),
                LinePrefixer::new(stderr, label.clone()),
            ),
        };
        run.announce();
        info!(dir = %self.opts.dir.display(), "starting program test");

        let mut workdir = run.prepare(&self.opts.dir, None).await?;
        run.seq
            .note(format_args!("projdir: {}\n", workdir.path().display()));

        let result = run.exercise(&mut workdir).await;

        run.seq.note(format_args!("Destroying environment\n"));
        let teardown = run.teardown_steps(workdir.path());
        let cleanup = run.seq.run_sequence(&teardown).await;

        let steps = run.seq.steps_started();
        match (result, cleanup) {
            (Ok(()), Ok(_)) => Ok(ProgramTestReport {
                label,
                steps,
                edits: self.opts.edit_dirs().len(),
            }),
            (Ok(()), Err(t)) => Err(HarnessError::Teardown(t)),
            (Err(e), Ok(_)) => Err(e),
            (Err(e), Err(t)) => {
                warn!(error = %t, "teardown failed after an earlier failure");
                Err(e)
            }
        }
    }
}

/// Resolved program paths.
#[derive(Debug, Clone)]
struct Toolchain {
    lumi: PathBuf,
    lumijs: PathBuf,
    yarn: PathBuf,
}

impl Toolchain {
    fn resolve(opts: &ProgramTestOptions) -> Result<Self, LookupError> {
        Ok(Self {
            lumi: resolve_program("lumi", opts.lumi_bin.as_deref())?,
            lumijs: resolve_program("lumijs", opts.lumijs_bin.as_deref())?,
            yarn: resolve_program("yarn", opts.yarn_bin.as_deref())?,
        })
    }
}

/// State of one lifecycle run.
struct Run<'a, O, E> {
    opts: &'a ProgramTestOptions,
    environment: &'a str,
    tools: Toolchain,
    seq: Sequencer<LinePrefixer<O>, LinePrefixer<E>>,
}

impl<O, E> Run<'_, O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn announce(&mut self) {
        let tools = &self.tools;
        self.seq
            .note(format_args!("sample: {}\n", self.opts.dir.display()));
        self.seq.note(format_args!("lumi: {}\n", tools.lumi.display()));
        self.seq
            .note(format_args!("lumijs: {}\n", tools.lumijs.display()));
        self.seq.note(format_args!("yarn: {}\n", tools.yarn.display()));
    }

    fn lumi(&self, dir: &Path) -> CommandStep {
        CommandStep::new(&self.tools.lumi, dir)
    }

    /// Copy `src` (without its state directory) to a fresh working copy,
    /// carry over `previous`'s state directory if given, then link
    /// dependencies and compile.
    async fn prepare(
        &mut self,
        src: &Path,
        previous: Option<&Path>,
    ) -> Result<Workdir, HarnessError> {
        let copy_err = |source: CopyError| match previous {
            None => HarnessError::Prepare {
                dir: src.to_path_buf(),
                source,
            },
            Some(base) => HarnessError::Edit {
                edit: src.to_path_buf(),
                base: base.to_path_buf(),
                source,
            },
        };

        // Copying walks the whole tree; keep it off the runtime's workers.
        let (from, base) = (src.to_path_buf(), previous.map(Path::to_path_buf));
        let workdir = tokio::task::spawn_blocking(move || {
            let workdir = Workdir::create(&from, Some(LUMI_STATE_DIR))?;
            if let Some(base) = base {
                workdir.overlay(&base, LUMI_STATE_DIR)?;
            }
            Ok::<_, CopyError>(workdir)
        })
        .await
        .map_err(|e| HarnessError::Aborted(e.to_string()))?
        .map_err(copy_err)?;

        let mut steps: Vec<CommandStep> = self
            .opts
            .dependencies()
            .iter()
            .map(|dep| CommandStep::new(&self.tools.yarn, workdir.path()).args(["link", dep.as_str()]))
            .collect();
        steps.push(CommandStep::new(&self.tools.lumijs, workdir.path()).arg("--verbose"));
        self.seq.run_sequence(&steps).await?;

        Ok(workdir)
    }

    /// Everything between preparing the project and tearing it down.
    async fn exercise(&mut self, workdir: &mut Workdir) -> Result<(), HarnessError> {
        let opts = self.opts;

        self.seq.note(format_args!("Initializing project\n"));
        let mut init = vec![self
            .lumi(workdir.path())
            .args(["env", "init", self.environment])];
        for (key, value) in &opts.config {
            init.push(self.lumi(workdir.path()).args(["config", key.as_str(), value.as_str()]));
        }
        self.seq.run_sequence(&init).await?;

        self.seq
            .note(format_args!("Performing primary plan and deploy\n"));
        self.plan_and_deploy(workdir.path()).await?;

        self.seq.note(format_args!(
            "Performing empty plan and deploy (no changes expected)\n"
        ));
        self.plan_and_deploy(workdir.path()).await?;

        for edit in opts.edit_dirs() {
            self.seq.note(format_args!(
                "Applying edit '{}' and rerunning plan and deploy\n",
                edit.display()
            ));
            let next = self.prepare(edit, Some(workdir.path())).await?;
            *workdir = next;
            self.plan_and_deploy(workdir.path()).await?;
        }
        Ok(())
    }

    async fn plan_and_deploy(&mut self, dir: &Path) -> Result<(), HarnessError> {
        let steps = [self.lumi(dir).arg("plan"), self.lumi(dir).arg("deploy")];
        self.seq.run_sequence(&steps).await?;
        Ok(())
    }

    fn teardown_steps(&self, dir: &Path) -> Vec<CommandStep> {
        vec![
            self.lumi(dir).args(["destroy", "--yes"]),
            self.lumi(dir).args(["env", "rm", "--yes", self.environment]),
        ]
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
