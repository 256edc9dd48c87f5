// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Process runner for git invocations.
//!
//! Spawns the git tool with argv passed as discrete arguments (no
//! shell), the working tree as current directory, and a scoped
//! environment applied per invocation.

use crate::error::{Result, StepError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Locale forced for every invocation so parsed output is deterministic
/// regardless of the host locale.
pub(crate) const LOCALE_ENV: &[(&str, &str)] = &[
    ("LANG", "C"),
    ("LC_ALL", "C"),
    ("LC_MESSAGES", "C"),
    ("LC_CTYPE", "C"),
];

/// Captured output of one completed step invocation.
#[derive(Debug, Clone, Default)]
pub struct StepOutput {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Runner bound to one repository and one scoped environment.
pub struct GitRunner {
    git_path: PathBuf,
    repo_path: PathBuf,
    workdir: PathBuf,
    env: Vec<(&'static str, Option<OsString>)>,
}

impl GitRunner {
    /// Create a runner for the given executable, control directory and
    /// working tree.
    pub fn new(git_path: PathBuf, repo_path: PathBuf, workdir: PathBuf) -> Self {
        Self {
            git_path,
            repo_path,
            workdir,
            env: Vec::new(),
        }
    }

    /// Attach scoped environment overrides applied to every invocation.
    ///
    /// A `None` value clears the variable from the child environment, so
    /// stale inherited state never reaches the tool.
    pub fn with_env(mut self, env: Vec<(&'static str, Option<OsString>)>) -> Self {
        self.env = env;
        self
    }

    /// Run `git -C <repo> <args...>` and capture its output.
    ///
    /// A non-zero exit code becomes a step failure carrying the step
    /// label and the captured streams.
    pub fn run(&self, step: &'static str, args: &[&str]) -> Result<StepOutput> {
        let mut cmd = Command::new(&self.git_path);
        cmd.arg("-C").arg(&self.repo_path);
        cmd.args(args);
        cmd.current_dir(&self.workdir);

        for (key, value) in LOCALE_ENV {
            cmd.env(key, value);
        }
        for (key, value) in &self.env {
            cmd.env_remove(key);
            if let Some(value) = value {
                cmd.env(key, value);
            }
        }

        tracing::debug!(
            step,
            command = %render_command(&self.git_path, &self.repo_path, args)
        );

        let output = cmd.output().map_err(|e| StepError::SpawnFailed {
            step,
            message: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(StepError::ExecutionFailed {
                step,
                stdout,
                stderr,
            }
            .into());
        }

        Ok(StepOutput { stdout, stderr })
    }

    /// The control directory this runner is bound to.
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

/// Render an invocation as a single display line, quoting arguments
/// that would not survive a shell unquoted.
pub fn render_command(git_path: &Path, repo_path: &Path, args: &[&str]) -> String {
    let mut parts = vec![
        git_path.display().to_string(),
        "-C".to_string(),
        quote_arg(&repo_path.display().to_string()),
    ];
    parts.extend(args.iter().map(|a| quote_arg(a)));
    parts.join(" ")
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
