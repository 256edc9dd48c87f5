// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Run outcome reporting.
//!
//! Assembles the terminal result of a run and renders it for humans or
//! for machines.

use crate::changes::ChangeSet;
use crate::error::StepError;
use console::style;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Final structured result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// Working tree the run operated on.
    pub local_path: PathBuf,
    /// Whether any change was staged and processed.
    pub changed: bool,
    /// Classification of the staged paths.
    pub files: ChangeSet,
    /// Detected git version, when the probe succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_version: Option<String>,
}

impl RunOutcome {
    /// Outcome for a run that found nothing staged.
    pub fn unchanged(local_path: PathBuf, git_version: Option<String>) -> Self {
        Self {
            local_path,
            changed: false,
            files: ChangeSet::default(),
            git_version,
        }
    }

    /// Render the outcome as a JSON document.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render the outcome as a styled human-readable summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Repository: {}", self.local_path.display());
        if let Some(version) = &self.git_version {
            let _ = writeln!(out, "Git version: {}", version);
        }

        if !self.changed {
            let _ = writeln!(out, "{}", style("No staged changes").dim());
            return out;
        }

        let _ = writeln!(
            out,
            "{} ({} file{})",
            style("Changed").green().bold(),
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        );
        for path in &self.files.added {
            let _ = writeln!(out, "  {} {}", style("added:").green(), path);
        }
        for path in &self.files.modified {
            let _ = writeln!(out, "  {} {}", style("modified:").yellow(), path);
        }
        for path in &self.files.deleted {
            let _ = writeln!(out, "  {} {}", style("deleted:").red(), path);
        }
        out
    }
}

/// Structured payload for a failed pipeline step.
#[derive(Debug, Serialize)]
pub struct FailureReport {
    /// Label of the failing step.
    pub failed: &'static str,
    /// Captured standard output of the failing invocation.
    pub stdout: String,
    /// Captured standard error of the failing invocation.
    pub stderr: String,
}

impl From<&StepError> for FailureReport {
    fn from(err: &StepError) -> Self {
        match err {
            StepError::ExecutionFailed {
                step,
                stdout,
                stderr,
            } => Self {
                failed: step,
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            },
            StepError::SpawnFailed { step, message } => Self {
                failed: step,
                stdout: String::new(),
                stderr: message.clone(),
            },
        }
    }
}

impl FailureReport {
    /// Render the failure as a JSON document.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
