// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Classification of staged changes.
//!
//! Parses `git diff-index --cached --name-status HEAD` output into an
//! added/modified/deleted change-set.

use crate::error::{ParseError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Regex splitting a status line into its fields.
    static ref FIELD_SPLIT: Regex = Regex::new(r"\s+").unwrap();
}

/// Staged paths grouped by the kind of change, in diff output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    /// Newly added paths.
    pub added: Vec<String>,
    /// Modified paths.
    pub modified: Vec<String>,
    /// Deleted paths.
    pub deleted: Vec<String>,
}

impl ChangeSet {
    /// Parse raw `--name-status` output into a change-set.
    ///
    /// Each line must be a status letter and a path separated by
    /// whitespace. `A`, `M` and `D` are classified; other letters are
    /// skipped. Empty input is a valid, empty change-set.
    pub fn parse(output: &str) -> Result<Self> {
        let mut changes = ChangeSet::default();

        for line in output.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = FIELD_SPLIT.split(line).collect();
            if fields.len() != 2 {
                return Err(ParseError::MalformedStatusLine {
                    line: line.to_string(),
                }
                .into());
            }
            let (status, path) = (fields[0], fields[1]);

            match status {
                "A" => changes.added.push(path.to_string()),
                "M" => changes.modified.push(path.to_string()),
                "D" => changes.deleted.push(path.to_string()),
                _ => continue,
            }
        }

        Ok(changes)
    }

    /// True when no staged change was classified.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    /// Total number of classified paths.
    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }
}
