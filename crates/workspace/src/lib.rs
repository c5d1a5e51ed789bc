// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pt-workspace: Isolated working copies of program directories

pub mod copy;
pub mod workdir;

pub use copy::{copy_tree, CopyError};
pub use workdir::Workdir;
