// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git version detection.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use std::process::Command;

use super::runner::LOCALE_ENV;

lazy_static! {
    /// Regex for the `git version <x>` banner.
    static ref VERSION_RE: Regex = Regex::new(r"git version (.*)$").unwrap();
}

/// Return the installed version of git, if it can be determined.
///
/// The probe is informational; any failure yields `None` so the run can
/// still fail on an actual git command instead.
pub fn probe(git_path: &Path) -> Option<String> {
    let mut cmd = Command::new(git_path);
    cmd.arg("--version");
    for (key, value) in LOCALE_ENV {
        cmd.env(key, value);
    }

    let output = cmd.output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_banner(&stdout)
}

/// Parse the version banner text alone.
fn parse_banner(banner: &str) -> Option<String> {
    VERSION_RE
        .captures(banner.trim())
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_banner() {
        assert_eq!(
            parse_banner("git version 2.39.2\n"),
            Some("2.39.2".to_string())
        );
        assert_eq!(
            parse_banner("git version 2.39.2 (Apple Git-143)"),
            Some("2.39.2 (Apple Git-143)".to_string())
        );
        assert_eq!(parse_banner("not a banner"), None);
    }

    #[test]
    fn test_probe_missing_executable() {
        assert_eq!(probe(&PathBuf::from("/nonexistent/gitcp-no-such-git")), None);
    }

    #[test]
    fn test_probe_real_git() {
        // git is available wherever the test suite runs
        let version = probe(Path::new("git"));
        assert!(version.is_some());
        assert!(!version.unwrap().is_empty());
    }
}
