// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;

use crate::config::GitcpConfig;
use crate::error::{GitcpError, Result};
use crate::git;
use crate::pipeline::{self, PipelinePlan};
use crate::report::FailureReport;
use crate::request::RunRequest;

use super::args::{Cli, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        GitcpConfig::load_from(config_path)?
    } else {
        GitcpConfig::load()?
    };

    let request = cli.to_request(&config);
    request.validate()?;
    tracing::debug!(
        local_path = %request.local_path.display(),
        mode = ?request.mode,
        "request validated"
    );

    if cli.dry_run {
        return run_dry(&cli, &request);
    }

    match pipeline::execute(&request) {
        Ok(outcome) => {
            match cli.format {
                Some(OutputFormat::Json) => println!("{}", outcome.to_json()),
                _ => print!("{}", outcome.render_text()),
            }
            Ok(())
        }
        Err(err) => {
            // The text rendering lives in the error itself; JSON gets the
            // structured step payload.
            if cli.format == Some(OutputFormat::Json) {
                if let GitcpError::Step(step_err) = &err {
                    println!("{}", FailureReport::from(step_err).to_json());
                }
            }
            Err(err)
        }
    }
}

/// Print the planned invocations without spawning git.
fn run_dry(cli: &Cli, request: &RunRequest) -> Result<()> {
    let plan = PipelinePlan::from_request(request);
    let planned = plan.describe(request)?;
    let git_version = git::probe_version(&request.git_path());

    match cli.format {
        Some(OutputFormat::Json) => {
            let payload = serde_json::json!({
                "local_path": request.local_path,
                "changed": false,
                "planned": planned,
                "git_version": git_version,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
            );
        }
        _ => {
            println!("Repository: {}", request.local_path.display());
            if let Some(version) = &git_version {
                println!("Git version: {}", version);
            }
            println!("{}", style("Would run:").bold());
            for line in &planned {
                println!("  {}", style(line).dim());
            }
        }
    }

    Ok(())
}
