// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module resolves the on-disk repository layout and drives the
//! git command-line tool for gitcp.

pub mod runner;
pub mod version;
mod repo;

pub use repo::locate_git_dir;
pub use runner::{GitRunner, StepOutput};
pub use version::probe as probe_version;
