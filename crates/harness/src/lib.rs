// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pt-harness: Program-test lifecycle driver
//!
//! Drives a sample program through the `lumi` command-line lifecycle:
//!
//! ```text
//! yarn link <each dependency>
//! lumijs --verbose
//! lumi env init <environment>
//! lumi config <each key> <value>
//! lumi plan / lumi deploy
//! lumi plan / lumi deploy          (no changes expected)
//! <per edit: copy edit, lumijs, lumi plan / lumi deploy>
//! lumi destroy --yes               (always, once the project is prepared)
//! lumi env rm --yes <environment>
//! ```
//!
//! Every command must succeed for the test to pass. Output from each program
//! is labeled with its directory so parallel runs stay readable.

mod error;
pub mod options;
pub mod program;
pub mod suite;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{ConfigError, HarnessError};
pub use options::ProgramTestOptions;
pub use program::{ProgramTest, ProgramTestReport, DEFAULT_ENVIRONMENT, LUMI_STATE_DIR};
pub use suite::{run_suite, SuiteManifest, SuiteOutcome};
