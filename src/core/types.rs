//! Core data types for one organizer run
//!
//! Everything here is scoped to a single invocation; nothing is persisted
//! apart from the filesystem effects themselves.

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::error::AppError;
use crate::utils::RunStamp;

/// The two fixed sets of file names the organizer works on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct OrganizerLists {
    /// Superseded files, moved into the archive directory
    pub(crate) archive: Vec<String>,
    /// Active files, renamed in place with a timestamp
    pub(crate) rename: Vec<String>,
}

impl OrganizerLists {
    pub(crate) fn new(archive: Vec<String>, rename: Vec<String>) -> Self {
        Self { archive, rename }
    }

    /// Reject entries that would make the passes conflict or escape the root.
    pub(crate) fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for (list, entries) in [("archive", &self.archive), ("rename", &self.rename)] {
            for entry in entries {
                entry_file_name(entry)?;
                if !seen.insert(entry.as_str()) {
                    return Err(AppError::InvalidConfig(format!(
                        "\"{entry}\" appears more than once (last seen in the {list} list)"
                    )));
                }
            }
        }

        // archived files keep only their file name, so those must be unique too
        let mut archived_names = HashSet::new();
        for entry in &self.archive {
            let file_name = entry_file_name(entry)?;
            if !archived_names.insert(file_name) {
                return Err(AppError::InvalidConfig(format!(
                    "archive entry \"{entry}\" would collide with another entry named {file_name}"
                )));
            }
        }
        Ok(())
    }
}

/// File-name component of a list entry, after checking the entry is usable
pub(crate) fn entry_file_name(entry: &str) -> Result<&str, AppError> {
    let invalid = |reason: &str| AppError::InvalidConfig(format!("entry \"{entry}\" {reason}"));
    if entry.trim().is_empty() {
        return Err(invalid("is empty"));
    }
    let path = Path::new(entry);
    if path.is_absolute() || path.has_root() {
        return Err(invalid("must be a relative path"));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid("must not contain .."));
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| invalid("has no file name"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ActionKind {
    Archived,
    Renamed,
    /// Listed but not on disk
    SkippedMissing,
    /// Already carries a date marker
    SkippedDated,
}

impl ActionKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ActionKind::Archived => "Archived",
            ActionKind::Renamed => "Renamed",
            ActionKind::SkippedMissing => "Missing",
            ActionKind::SkippedDated => "Already dated",
        }
    }
}

/// What happened to one list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Action {
    pub(crate) entry: String,
    pub(crate) kind: ActionKind,
    pub(crate) from: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) to: Option<PathBuf>,
}

/// Outcome of a full run, in processing order
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RunReport {
    pub(crate) archive_dir: PathBuf,
    pub(crate) stamp: RunStamp,
    pub(crate) dry_run: bool,
    pub(crate) actions: Vec<Action>,
}

impl RunReport {
    pub(crate) fn new(archive_dir: PathBuf, stamp: RunStamp, dry_run: bool) -> Self {
        Self {
            archive_dir,
            stamp,
            dry_run,
            actions: Vec::new(),
        }
    }

    pub(crate) fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind == kind).count()
    }

    pub(crate) fn changed(&self) -> usize {
        self.count(ActionKind::Archived) + self.count(ActionKind::Renamed)
    }
}
