// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the gitcp application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gitcp operations.
#[derive(Error, Debug)]
pub enum GitcpError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Request validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Repository resolution errors
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    // SSH transport setup errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    // Diff output parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    // Pipeline step errors
    #[error("Step error: {0}")]
    Step(#[from] StepError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Request validation errors, detected before any external process runs.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("A commit message is required to commit changes")]
    MissingComment,

    #[error("At least one path to stage is required to commit changes")]
    EmptyAddList,

    #[error("Both user and token are required for https mode")]
    MissingCredentials,

    #[error("A branch is required to push")]
    MissingBranch,

    #[error("A remote is required to push")]
    MissingRemote,

    #[error("Wildcard pathspec '{path}' is not supported; list paths explicitly")]
    UnsupportedPathspec { path: String },
}

/// Repository resolution errors.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error(".git file has invalid git dir reference format: {path}")]
    MalformedGitLink { path: PathBuf },

    #[error("{path} is not a directory")]
    InvalidGitDir { path: PathBuf },

    #[error("Failed to read .git link: {message}")]
    UnreadableGitLink { message: String },
}

/// SSH transport setup errors.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to create ssh wrapper script: {message}")]
    SetupFailed { message: String },
}

/// Diff status output parse errors.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed diff status line: '{line}'")]
    MalformedStatusLine { line: String },
}

/// Pipeline step errors.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("Failed to {step}: {stdout} {stderr}")]
    ExecutionFailed {
        step: &'static str,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to spawn {step}: {message}")]
    SpawnFailed { step: &'static str, message: String },
}

impl StepError {
    /// Label of the step this error originated from.
    pub fn step(&self) -> &'static str {
        match self {
            StepError::ExecutionFailed { step, .. } => step,
            StepError::SpawnFailed { step, .. } => step,
        }
    }
}

/// Result type alias for gitcp operations.
pub type Result<T> = std::result::Result<T, GitcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_display() {
        let err = StepError::ExecutionFailed {
            step: "git_push",
            stdout: String::new(),
            stderr: "remote rejected".to_string(),
        };
        assert!(err.to_string().contains("git_push"));
        assert!(err.to_string().contains("remote rejected"));
        assert_eq!(err.step(), "git_push");
    }

    #[test]
    fn test_repo_error_display() {
        let err = RepoError::InvalidGitDir {
            path: PathBuf::from("/repo/other/.git"),
        };
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_gitcp_error_from_validation() {
        let err: GitcpError = ValidationError::MissingComment.into();
        assert!(err.to_string().contains("commit message"));
    }
}
