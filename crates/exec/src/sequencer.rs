// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command sequencer.
//!
//! Runs an ordered list of [`CommandStep`]s to completion, one at a time,
//! stopping at the first step that fails to start or exits non-zero. Child
//! stdout and stderr are streamed into the sequencer's writers while the
//! step runs; nothing is buffered beyond a single read.
//!
//! There is no retry, timeout, or rollback: a step's side effects stay in
//! place when a later step fails, and a hung child blocks the owning task.
//! Cleanup belongs to the caller, usually as a teardown list passed to
//! [`Sequencer::run_with_teardown`].

use std::fmt;
use std::io::{self, Write};
use std::process::Stdio;

use pt_core::{CommandStep, StepOutcome};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{SequenceError, StepError};

/// Read buffer size for forwarding child output.
const PUMP_BUF_SIZE: usize = 8192;

/// Summary of a sequence that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceReport {
    /// Number of steps that ran successfully.
    pub completed: usize,
}

/// Runs command steps for one test run, routing their output to the run's
/// own stdout/stderr writers.
#[derive(Debug)]
pub struct Sequencer<O, E> {
    stdout: O,
    stderr: E,
    started: usize,
}

impl<O, E> Sequencer<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    pub fn new(stdout: O, stderr: E) -> Self {
        Self {
            stdout,
            stderr,
            started: 0,
        }
    }

    /// Number of steps this sequencer has attempted to start.
    pub fn steps_started(&self) -> usize {
        self.started
    }

    pub fn stdout(&mut self) -> &mut O {
        &mut self.stdout
    }

    pub fn stderr(&mut self) -> &mut E {
        &mut self.stderr
    }

    pub fn into_writers(self) -> (O, E) {
        (self.stdout, self.stderr)
    }

    /// Best-effort informational line on the stdout writer.
    pub fn note(&mut self, args: fmt::Arguments<'_>) {
        pt_core::note(&mut self.stdout, args);
    }

    /// Run a single step to completion.
    pub async fn run_step(&mut self, step: &CommandStep) -> Result<StepOutcome, StepError> {
        let command = step.command_line();
        self.note(format_args!(
            "\n**** Invoke '{}' in {}\n",
            command,
            step.dir().display()
        ));
        info!(command = %command, dir = %step.dir().display(), "invoking step");

        let mut cmd = Command::new(step.program());
        cmd.args(step.arguments())
            .current_dir(step.dir())
            .envs(step.env_overrides())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        self.started += 1;
        let mut child = cmd.spawn().map_err(StepError::Spawn)?;

        let out = child.stdout.take();
        let err = child.stderr.take();
        // On a writer failure the child is dropped here, which kills it.
        tokio::try_join!(pump(out, &mut self.stdout), pump(err, &mut self.stderr))
            .map_err(StepError::Output)?;

        let status = child.wait().await.map_err(StepError::Wait)?;
        let outcome = StepOutcome::from(status);
        debug!(command = %command, %outcome, "step finished");

        if outcome.success {
            Ok(outcome)
        } else {
            Err(StepError::Exit(outcome))
        }
    }

    /// Run `steps` in order, stopping at the first failure.
    pub async fn run_sequence(
        &mut self,
        steps: &[CommandStep],
    ) -> Result<SequenceReport, SequenceError> {
        let total = steps.len();
        for (index, step) in steps.iter().enumerate() {
            if let Err(source) = self.run_step(step).await {
                warn!(step = index + 1, total, command = %step.command_line(), error = %source, "step failed");
                return Err(SequenceError {
                    index,
                    total,
                    command: step.command_line(),
                    dir: step.dir().to_path_buf(),
                    source,
                });
            }
        }
        Ok(SequenceReport { completed: total })
    }

    /// Run `steps`, then `teardown` regardless of how `steps` went.
    ///
    /// A failure in `steps` is the reported error even if teardown also
    /// fails; the teardown failure is then only logged.
    pub async fn run_with_teardown(
        &mut self,
        steps: &[CommandStep],
        teardown: &[CommandStep],
    ) -> Result<SequenceReport, SequenceError> {
        let main = self.run_sequence(steps).await;
        let cleanup = self.run_sequence(teardown).await;

        match (main, cleanup) {
            (Ok(main), Ok(cleanup)) => Ok(SequenceReport {
                completed: main.completed + cleanup.completed,
            }),
            (Err(e), Ok(_)) => Err(e),
            (Ok(_), Err(t)) => Err(t),
            (Err(e), Err(t)) => {
                warn!(error = %t, "teardown failed after an earlier failure");
                Err(e)
            }
        }
    }
}

/// Copy everything from `reader` into `writer` until EOF.
async fn pump<R, W>(reader: Option<R>, writer: &mut W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: Write + ?Sized,
{
    let Some(mut reader) = reader else {
        return Ok(());
    };

    let mut buf = vec![0u8; PUMP_BUF_SIZE];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
