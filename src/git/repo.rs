// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository control-directory resolution.

use crate::error::{RepoError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the control directory for a working tree.
///
/// `<path>/.git` is usually a directory and is returned as-is. For
/// linked working trees and submodules it is a file containing a single
/// `gitdir: <target>` line; the target is followed, resolving relative
/// targets against the working tree. When no `.git` entry exists the
/// literal path is returned and later git invocations surface the
/// failure.
pub fn locate_git_dir(local_path: &Path) -> Result<PathBuf> {
    let git_entry = local_path.join(".git");

    if git_entry.is_dir() {
        return Ok(git_entry);
    }

    if git_entry.is_file() {
        let data = fs::read_to_string(&git_entry).map_err(|e| RepoError::UnreadableGitLink {
            message: e.to_string(),
        })?;

        let line = data.trim_end();
        let (prefix, target) = line
            .split_once("gitdir: ")
            .ok_or_else(|| RepoError::MalformedGitLink {
                path: git_entry.clone(),
            })?;
        if !prefix.is_empty() {
            return Err(RepoError::MalformedGitLink { path: git_entry }.into());
        }

        let resolved = if Path::new(target).is_absolute() {
            PathBuf::from(target)
        } else {
            local_path.join(target)
        };
        if !resolved.is_dir() {
            return Err(RepoError::InvalidGitDir { path: resolved }.into());
        }
        return Ok(resolved);
    }

    Ok(git_entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitcpError;
    use tempfile::TempDir;

    #[test]
    fn test_plain_git_directory() {
        let dir = TempDir::new().unwrap();
        let git_dir = dir.path().join(".git");
        fs::create_dir(&git_dir).unwrap();

        assert_eq!(locate_git_dir(dir.path()).unwrap(), git_dir);
    }

    #[test]
    fn test_missing_git_entry_returned_unresolved() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            locate_git_dir(dir.path()).unwrap(),
            dir.path().join(".git")
        );
    }

    #[test]
    fn test_gitdir_link_relative_target() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        let other = dir.path().join("other").join(".git");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(&other).unwrap();
        fs::write(work.join(".git"), "gitdir: ../other/.git\n").unwrap();

        let resolved = locate_git_dir(&work).unwrap();
        assert!(resolved.is_dir());
        assert!(resolved.ends_with("other/.git"));
    }

    #[test]
    fn test_gitdir_link_absolute_target() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        let target = dir.path().join("detached").join(".git");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(&target).unwrap();
        fs::write(work.join(".git"), format!("gitdir: {}\n", target.display())).unwrap();

        assert_eq!(locate_git_dir(&work).unwrap(), target);
    }

    #[test]
    fn test_gitdir_link_to_missing_target() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(work.join(".git"), "gitdir: ../other/.git\n").unwrap();

        assert!(matches!(
            locate_git_dir(&work),
            Err(GitcpError::Repo(RepoError::InvalidGitDir { .. }))
        ));
    }

    #[test]
    fn test_malformed_gitdir_link() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(work.join(".git"), "not a gitdir reference\n").unwrap();

        assert!(matches!(
            locate_git_dir(&work),
            Err(GitcpError::Repo(RepoError::MalformedGitLink { .. }))
        ));
    }

    #[test]
    fn test_gitdir_link_with_prefix() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(work.join(".git"), "ref: gitdir: ../other/.git\n").unwrap();

        assert!(matches!(
            locate_git_dir(&work),
            Err(GitcpError::Repo(RepoError::MalformedGitLink { .. }))
        ));
    }
}
