// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! SSH wrapper script creation.

use crate::error::{Result, TransportError};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Shim installed as `GIT_SSH` so git's ssh invocations run in batch
/// mode and pick up the key file and extra options from the scoped
/// environment, forwarding all arguments unchanged.
const WRAPPER_TEMPLATE: &str = r#"#!/bin/sh
if [ -z "$GIT_SSH_OPTS" ]; then
    BASEOPTS=""
else
    BASEOPTS=$GIT_SSH_OPTS
fi

# Let ssh fail rather than prompt
BASEOPTS="$BASEOPTS -o BatchMode=yes"

if [ -z "$GIT_KEY" ]; then
    ssh $BASEOPTS "$@"
else
    ssh -i "$GIT_KEY" -o IdentitiesOnly=yes $BASEOPTS "$@"
fi
"#;

/// Write the wrapper script to a private temporary file.
///
/// The script is created next to the running executable when that
/// directory is writable, which keeps sandboxes that only trust the
/// install tree working; otherwise it falls back to the system
/// temporary directory. The returned handle deletes the file on drop.
pub fn write_ssh_wrapper() -> Result<NamedTempFile> {
    let mut file = create_wrapper_file()
        .map_err(|e| TransportError::SetupFailed {
            message: e.to_string(),
        })?;

    file.write_all(WRAPPER_TEMPLATE.as_bytes())
        .map_err(|e| TransportError::SetupFailed {
            message: e.to_string(),
        })?;

    // mkstemp creates 0600; add owner-execute
    let mut perms = file
        .as_file()
        .metadata()
        .map_err(|e| TransportError::SetupFailed {
            message: e.to_string(),
        })?
        .permissions();
    perms.set_mode(perms.mode() | 0o100);
    file.as_file()
        .set_permissions(perms)
        .map_err(|e| TransportError::SetupFailed {
            message: e.to_string(),
        })?;

    Ok(file)
}

fn create_wrapper_file() -> std::io::Result<NamedTempFile> {
    if let Some(dir) = module_dir() {
        if let Ok(file) = Builder::new().prefix("gitcp-ssh-").tempfile_in(&dir) {
            return Ok(file);
        }
    }
    Builder::new().prefix("gitcp-ssh-").tempfile()
}

/// Directory of the running executable, when it can be determined.
fn module_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_wrapper_is_owner_executable() {
        let wrapper = write_ssh_wrapper().unwrap();
        let mode = fs::metadata(wrapper.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o700);
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn test_wrapper_content() {
        let wrapper = write_ssh_wrapper().unwrap();
        let content = fs::read_to_string(wrapper.path()).unwrap();
        assert!(content.starts_with("#!/bin/sh"));
        assert!(content.contains("BatchMode=yes"));
        assert!(content.contains("IdentitiesOnly=yes"));
        assert!(content.contains("\"$@\""));
    }

    #[test]
    fn test_wrapper_deleted_on_drop() {
        let path = {
            let wrapper = write_ssh_wrapper().unwrap();
            wrapper.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
