// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pt-exec: Sequential execution of external command steps
//!
//! A [`Sequencer`] owns the stdout/stderr writers of one test run and drives
//! its [`CommandStep`](pt_core::CommandStep)s one at a time through
//! [`tokio::process::Command`], streaming child output into the writers as
//! it arrives. Independent sequencers may run concurrently on separate
//! tasks; they share nothing.

pub mod error;
pub mod lookup;
pub mod sequencer;

pub use error::{LookupError, SequenceError, StepError};
pub use lookup::resolve_program;
pub use sequencer::{SequenceReport, Sequencer};
