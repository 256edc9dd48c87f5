// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for gitcp.
//!
//! This module handles loading configuration defaults from gitcp.toml
//! files (project tree, home directory, XDG config directory).

mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config};
pub use schema::*;
