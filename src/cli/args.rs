// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::GitcpConfig;
use crate::request::{RunRequest, TransportMode};

/// gitcp - Automated git stage, commit and push
///
/// Stages the requested paths, commits them and pushes to a remote in
/// one idempotent operation, for use from automation pipelines.
#[derive(Parser, Debug)]
#[command(name = "gitcp")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Automated git stage, commit and push for pipelines", long_about = None)]
pub struct Cli {
    /// Working tree to operate on
    #[arg(value_name = "LOCAL_PATH")]
    pub local_path: PathBuf,

    /// Commit message
    #[arg(short = 'm', long)]
    pub comment: Option<String>,

    /// Path to stage; repeat for multiple paths (defaults to ".")
    #[arg(short, long = "add", value_name = "PATH")]
    pub add: Vec<String>,

    /// Branch to push to
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Remote to push to
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Skip the push step
    #[arg(long)]
    pub no_push: bool,

    /// Skip the commit step
    #[arg(long)]
    pub no_commit: bool,

    /// Pass --set-upstream on push
    #[arg(short = 'u', long)]
    pub set_upstream: bool,

    /// Push option forwarded to the remote
    #[arg(long, value_name = "OPTION")]
    pub push_option: Option<String>,

    /// Transport used for remote operations
    #[arg(long, value_enum)]
    pub mode: Option<TransportMode>,

    /// Private key file for ssh operations
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,

    /// Extra ssh options
    #[arg(long, value_name = "OPTS")]
    pub ssh_opts: Option<String>,

    /// Accept unknown host keys without prompting
    #[arg(long)]
    pub accept_hostkey: bool,

    /// Override the git executable
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Username for https operations
    #[arg(long, env = "GITCP_USER")]
    pub user: Option<String>,

    /// API token for https operations
    #[arg(long, env = "GITCP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Show the planned git invocations without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Build the run request by layering CLI arguments over
    /// configuration defaults over built-in defaults.
    pub fn to_request(&self, config: &GitcpConfig) -> RunRequest {
        let defaults = &config.defaults;

        RunRequest {
            local_path: self.local_path.clone(),
            user: self.user.clone(),
            token: self.token.clone(),
            comment: self.comment.clone(),
            add: if self.add.is_empty() {
                vec![".".to_string()]
            } else {
                self.add.clone()
            },
            branch: self
                .branch
                .clone()
                .or_else(|| defaults.branch.clone())
                .unwrap_or_else(|| "master".to_string()),
            remote: self
                .remote
                .clone()
                .or_else(|| defaults.remote.clone())
                .unwrap_or_else(|| "origin".to_string()),
            push: if self.no_push {
                false
            } else {
                defaults.push.unwrap_or(true)
            },
            set_upstream: self.set_upstream || defaults.set_upstream.unwrap_or(false),
            commit: if self.no_commit {
                false
            } else {
                defaults.commit.unwrap_or(true)
            },
            push_option: self.push_option.clone(),
            mode: self.mode.or(defaults.mode).unwrap_or(TransportMode::Ssh),
            key_file: self.key_file.clone().or_else(|| defaults.key_file.clone()),
            ssh_opts: self.ssh_opts.clone().or_else(|| defaults.ssh_opts.clone()),
            executable: self
                .executable
                .clone()
                .or_else(|| defaults.executable.clone()),
            accept_hostkey: self.accept_hostkey || defaults.accept_hostkey.unwrap_or(false),
        }
    }
}
