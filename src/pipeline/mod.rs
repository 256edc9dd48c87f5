// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The stage/commit/push command pipeline.
//!
//! Steps run in a fixed order — stage, report staged changes, commit,
//! push — with the set of enabled steps decided once from the validated
//! request. The first failing step aborts the run; an empty staged
//! change-set ends the run successfully before commit and push.

use crate::changes::ChangeSet;
use crate::error::Result;
use crate::git::{self, runner::render_command, GitRunner};
use crate::report::RunOutcome;
use crate::request::{RunRequest, TransportMode};
use crate::transport::TransportContext;

/// A unit of work in the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Stage the requested paths.
    Stage,
    /// Query and classify the staged changes.
    ReportStaged,
    /// Commit the staged changes.
    Commit,
    /// Push to the remote.
    Push,
}

impl StepKind {
    /// Label carried on step failures.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Stage => "git_add",
            StepKind::ReportStaged => "git_files_added",
            StepKind::Commit => "git_commit",
            StepKind::Push => "git_push",
        }
    }
}

/// The ordered list of steps one request enables.
#[derive(Debug, Clone)]
pub struct PipelinePlan {
    steps: Vec<StepKind>,
}

impl PipelinePlan {
    /// Build the step list from a validated request.
    ///
    /// Flags are consulted here and nowhere else; the steps themselves
    /// never re-check the request.
    pub fn from_request(request: &RunRequest) -> Self {
        let mut steps = Vec::new();
        if !request.add.is_empty() {
            steps.push(StepKind::Stage);
            steps.push(StepKind::ReportStaged);
        }
        if request.commit {
            steps.push(StepKind::Commit);
        }
        if request.push {
            steps.push(StepKind::Push);
        }
        Self { steps }
    }

    /// The enabled steps in execution order.
    pub fn steps(&self) -> &[StepKind] {
        &self.steps
    }

    /// Render the planned git invocations without executing anything.
    pub fn describe(&self, request: &RunRequest) -> Result<Vec<String>> {
        let git_path = request.git_path();
        let repo_path = git::locate_git_dir(&request.local_path)?;
        Ok(self
            .steps
            .iter()
            .map(|step| {
                let args = step_args(*step, request);
                let refs: Vec<&str> = args.iter().map(String::as_str).collect();
                render_command(&git_path, &repo_path, &refs)
            })
            .collect())
    }
}

/// Arguments for one step, after `git -C <repo>`.
///
/// The commit message is passed as its own argument, so it reaches git
/// byte-for-byte; no quote escaping is applied or needed.
fn step_args(step: StepKind, request: &RunRequest) -> Vec<String> {
    match step {
        StepKind::Stage => {
            let mut args = vec!["add".to_string()];
            args.extend(request.add.iter().cloned());
            args
        }
        StepKind::ReportStaged => ["diff-index", "--cached", "--name-status", "HEAD"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        StepKind::Commit => vec![
            "commit".to_string(),
            "-m".to_string(),
            request.comment.clone().unwrap_or_default(),
        ],
        StepKind::Push => {
            let mut args = vec!["push".to_string()];
            if let Some(option) = &request.push_option {
                args.push(format!("--push-option={}", option));
            }
            args.push(request.remote.clone());
            if request.set_upstream {
                args.push("--set-upstream".to_string());
            }
            args.push(request.branch.clone());
            args
        }
    }
}

/// Execute the pipeline for a validated request.
///
/// The ssh transport context lives for the whole run and tears the
/// wrapper script down on every exit path, including step failures.
pub fn execute(request: &RunRequest) -> Result<RunOutcome> {
    let repo_path = git::locate_git_dir(&request.local_path)?;
    tracing::debug!(repo_path = %repo_path.display(), "resolved control directory");

    let transport = match request.mode {
        TransportMode::Ssh => Some(TransportContext::materialize(
            request.key_file.clone(),
            request.effective_ssh_opts(),
        )?),
        TransportMode::Https => None,
    };

    let mut runner = GitRunner::new(
        request.git_path(),
        repo_path,
        request.local_path.clone(),
    );
    if let Some(transport) = &transport {
        runner = runner.with_env(transport.env());
    }

    let git_version = git::probe_version(&request.git_path());
    tracing::debug!(?git_version, "detected git");

    let plan = PipelinePlan::from_request(request);
    let mut files = ChangeSet::default();
    let mut changed = false;

    for step in plan.steps() {
        let args = step_args(*step, request);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();

        match step {
            StepKind::ReportStaged => {
                let output = runner.run(step.label(), &refs)?;
                let staged = ChangeSet::parse(&output.stdout)?;
                if staged.is_empty() {
                    tracing::info!("no staged changes, nothing to commit");
                    return Ok(RunOutcome::unchanged(
                        request.local_path.clone(),
                        git_version,
                    ));
                }
                changed = true;
                files = staged;
            }
            _ => {
                runner.run(step.label(), &refs)?;
            }
        }
    }

    Ok(RunOutcome {
        local_path: request.local_path.clone(),
        changed,
        files,
        git_version,
    })
}
