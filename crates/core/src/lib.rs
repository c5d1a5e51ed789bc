// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pt-core: Core types for the progtest harness
//!
//! Output labeling and the command-step model shared by the sequencer and
//! the program-test lifecycle.

pub mod label;
pub mod note;
pub mod prefix;
pub mod step;

pub use label::dir_label;
pub use note::note;
pub use prefix::LinePrefixer;
pub use step::{CommandStep, StepOutcome};
