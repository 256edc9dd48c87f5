// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! SSH transport configuration.
//!
//! Materializes the wrapper script git uses as its ssh command and the
//! environment scoped to one run. The environment is never written into
//! the process; it is applied to each spawned git command, so no state
//! survives across runs.

mod wrapper;

pub use wrapper::write_ssh_wrapper;

use crate::error::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Ephemeral ssh configuration owned by one run.
///
/// Holds the wrapper script (deleted when the context drops, on every
/// exit path) and the values for the three variables the wrapper reads.
pub struct TransportContext {
    wrapper: NamedTempFile,
    key_file: Option<PathBuf>,
    ssh_opts: Option<String>,
}

impl TransportContext {
    /// Create the wrapper script and capture the run's ssh settings.
    pub fn materialize(key_file: Option<PathBuf>, ssh_opts: Option<String>) -> Result<Self> {
        let wrapper = write_ssh_wrapper()?;
        tracing::debug!(wrapper = %wrapper.path().display(), "ssh wrapper created");
        Ok(Self {
            wrapper,
            key_file,
            ssh_opts,
        })
    }

    /// Path of the wrapper script.
    pub fn wrapper_path(&self) -> &Path {
        self.wrapper.path()
    }

    /// Environment overrides for each git invocation.
    ///
    /// Every variable is listed, present or not: a `None` value clears
    /// any stale inherited state from the child environment.
    pub fn env(&self) -> Vec<(&'static str, Option<OsString>)> {
        vec![
            (
                "GIT_SSH",
                Some(self.wrapper.path().as_os_str().to_os_string()),
            ),
            (
                "GIT_KEY",
                self.key_file
                    .as_ref()
                    .map(|path| path.as_os_str().to_os_string()),
            ),
            ("GIT_SSH_OPTS", self.ssh_opts.as_ref().map(OsString::from)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_with_key_and_opts() {
        let context = TransportContext::materialize(
            Some(PathBuf::from("/home/user/.ssh/id_ed25519")),
            Some("-o StrictHostKeyChecking=no".to_string()),
        )
        .unwrap();

        let env = context.env();
        assert_eq!(env.len(), 3);
        assert_eq!(
            env[0],
            (
                "GIT_SSH",
                Some(context.wrapper_path().as_os_str().to_os_string())
            )
        );
        assert_eq!(
            env[1],
            (
                "GIT_KEY",
                Some(OsString::from("/home/user/.ssh/id_ed25519"))
            )
        );
        assert_eq!(
            env[2],
            (
                "GIT_SSH_OPTS",
                Some(OsString::from("-o StrictHostKeyChecking=no"))
            )
        );
    }

    #[test]
    fn test_env_clears_absent_values() {
        let context = TransportContext::materialize(None, None).unwrap();
        let env = context.env();
        assert_eq!(env[1], ("GIT_KEY", None));
        assert_eq!(env[2], ("GIT_SSH_OPTS", None));
    }

    #[test]
    fn test_wrapper_removed_when_context_drops() {
        let path = {
            let context = TransportContext::materialize(None, None).unwrap();
            assert!(context.wrapper_path().exists());
            context.wrapper_path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
