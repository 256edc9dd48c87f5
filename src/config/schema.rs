// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from gitcp.toml. Every
//! field is optional; configuration supplies defaults that CLI
//! arguments override.

use crate::request::TransportMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main configuration structure for gitcp.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GitcpConfig {
    /// Default values for run requests.
    pub defaults: DefaultsConfig,
}

impl GitcpConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Request defaults configurable per project or per user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Remote to push to.
    pub remote: Option<String>,

    /// Branch to push to.
    pub branch: Option<String>,

    /// Transport channel for remote operations.
    pub mode: Option<TransportMode>,

    /// Override for the git executable.
    pub executable: Option<PathBuf>,

    /// Private key file for ssh operations.
    pub key_file: Option<PathBuf>,

    /// Extra ssh options.
    pub ssh_opts: Option<String>,

    /// Whether to push after committing.
    pub push: Option<bool>,

    /// Whether to commit staged changes.
    pub commit: Option<bool>,

    /// Whether to pass `--set-upstream` on push.
    pub set_upstream: Option<bool>,

    /// Accept unknown host keys without prompting.
    pub accept_hostkey: Option<bool>,
}
