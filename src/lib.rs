// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gitcp - Automated git stage, commit and push
//!
//! A CLI tool that runs the local stage → commit → push workflow as a
//! single idempotent operation for automation pipelines.
//!
//! # Features
//!
//! - **Command Pipeline**: stage, classify, commit and push in a fixed
//!   order with short-circuit failure handling
//! - **Change Classification**: staged paths reported as
//!   added/modified/deleted
//! - **SSH Transport**: non-interactive authentication through a
//!   temporary wrapper script scoped to the run
//! - **Linked Worktrees**: `.git` indirection files are resolved to the
//!   real control directory
//! - **Machine Output**: JSON results for CI consumption
//!
//! # Example
//!
//! ```no_run
//! use gitcp::request::RunRequest;
//!
//! let request = RunRequest {
//!     local_path: "/work/repo".into(),
//!     comment: Some("My amazing backup".to_string()),
//!     ..Default::default()
//! };
//! request.validate().unwrap();
//!
//! let outcome = gitcp::pipeline::execute(&request).unwrap();
//! println!("changed: {}", outcome.changed);
//! ```

// Module declarations
pub mod changes;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod report;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use changes::ChangeSet;
pub use error::{GitcpError, Result};
pub use report::RunOutcome;
pub use request::RunRequest;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gitcp.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
